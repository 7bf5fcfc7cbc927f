//! Precondition checks for ledger operations.
//!
//! Pure functions: no state beyond their arguments, no mutation, and
//! each failure is a specific [`LedgerError`] rather than a boolean.
//! The transition engine runs these before staging any write.

use crate::domain::asset_subscription::aggregate::{Asset, Investor, RegisterAssetCommand};
use crate::domain::asset_subscription::errors::LedgerError;
use crate::domain::shared::{InvestorId, Isin, LockInPeriod, Money, Timestamp, Units};

/// Smallest redemption the ledger accepts, in units.
///
/// Subscriptions carry no such floor; only redemption enforces one.
pub const MIN_REDEMPTION_UNITS: Units = Units::new(30);

/// Check the fields of a new investor record.
///
/// # Errors
///
/// Returns `InvalidInput` for an empty id or non-positive balance.
pub fn validate_new_investor(id: &InvestorId, balance: Money) -> Result<(), LedgerError> {
    if id.is_empty() {
        return Err(LedgerError::invalid_input("investor_id", "must not be empty"));
    }
    if !balance.is_positive() {
        return Err(LedgerError::invalid_input("balance", "must be positive"));
    }
    Ok(())
}

/// Check the fields of a new asset record.
///
/// # Errors
///
/// Returns `InvalidInput` naming the first offending field.
pub fn validate_new_asset(cmd: &RegisterAssetCommand) -> Result<(), LedgerError> {
    if cmd.isin.is_empty() {
        return Err(LedgerError::invalid_input("isin", "must not be empty"));
    }
    if cmd.company_name.is_empty() {
        return Err(LedgerError::invalid_input("company_name", "must not be empty"));
    }
    if cmd.asset_type.is_empty() {
        return Err(LedgerError::invalid_input("asset_type", "must not be empty"));
    }
    if !cmd.total_units.is_positive() {
        return Err(LedgerError::invalid_input("total_units", "must be positive"));
    }
    if !cmd.price_per_unit.is_positive() {
        return Err(LedgerError::invalid_input("price_per_unit", "must be positive"));
    }
    if !cmd.available_units.is_positive() {
        return Err(LedgerError::invalid_input("available_units", "must be positive"));
    }
    if cmd.available_units > cmd.total_units {
        return Err(LedgerError::invalid_input(
            "available_units",
            "must not exceed total_units",
        ));
    }
    Ok(())
}

/// Check a subscription against supply and funds.
///
/// Returns the subscription cost on success so the engine debits the
/// exact amount it validated.
///
/// # Errors
///
/// `InsufficientSupply` when `units` exceeds the available supply,
/// `InsufficientBalance` when the cost exceeds the balance, and
/// `InvalidInput` when the cost is not representable.
pub fn validate_subscription(
    asset: &Asset,
    investor: &Investor,
    units: Units,
) -> Result<Money, LedgerError> {
    if units > asset.available_units() {
        return Err(LedgerError::InsufficientSupply {
            isin: asset.isin().to_string(),
            requested: units,
            available: asset.available_units(),
        });
    }
    let cost = asset
        .price_per_unit()
        .checked_cost(units)
        .ok_or_else(|| {
            LedgerError::invalid_input("units", "subscription cost is not representable")
        })?;
    if cost > investor.balance() {
        return Err(LedgerError::InsufficientBalance {
            investor_id: investor.investor_id().to_string(),
            required: cost,
            available: investor.balance(),
        });
    }
    Ok(cost)
}

/// Check a redemption against size, holdings, and the lock-in clock.
///
/// The minimum-size check runs first: an undersized request is
/// rejected as undersized even when holdings or lock-in would also
/// fail it. The lock-in boundary is inclusive: redemption at exactly
/// the expiry instant succeeds.
///
/// # Errors
///
/// `BelowMinimumRedemption`, `InsufficientHoldings`, or `LockInActive`.
pub fn validate_redemption(
    investor: &Investor,
    isin: &Isin,
    units: Units,
    now: Timestamp,
    lock_in: LockInPeriod,
) -> Result<(), LedgerError> {
    if units < MIN_REDEMPTION_UNITS {
        return Err(LedgerError::BelowMinimumRedemption {
            requested: units,
            minimum: MIN_REDEMPTION_UNITS,
        });
    }
    let held = investor.holdings_of(isin);
    if units > held {
        return Err(LedgerError::InsufficientHoldings {
            isin: isin.to_string(),
            requested: units,
            held,
        });
    }
    // A position with no recorded subscription instant carries no
    // clock to enforce.
    if let Some(subscribed_at) = investor.subscription_timestamp(isin) {
        let unlocks_at = subscribed_at.lock_in_expiry(lock_in);
        if now < unlocks_at {
            return Err(LedgerError::LockInActive {
                isin: isin.to_string(),
                unlocks_at,
                now,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::asset_subscription::aggregate::CreateInvestorCommand;
    use test_case::test_case;

    fn make_asset(available: i64) -> Asset {
        Asset::register(RegisterAssetCommand {
            isin: Isin::new("US1"),
            company_name: "Issuer".to_string(),
            asset_type: "bond".to_string(),
            total_units: Units::new(1000),
            price_per_unit: Money::new(100),
            available_units: Units::new(available),
        })
        .unwrap()
    }

    fn make_investor(balance: i64) -> Investor {
        Investor::open(CreateInvestorCommand {
            investor_id: InvestorId::new("inv-001"),
            balance: Money::new(balance),
        })
        .unwrap()
    }

    fn make_subscribed_investor(units: i64, at: i64) -> Investor {
        let mut investor = make_investor(100_000);
        investor
            .apply_subscription(
                &Isin::new("US1"),
                Units::new(units),
                Money::new(units * 100),
                Timestamp::new(at),
            )
            .unwrap();
        investor
    }

    #[test]
    fn new_investor_rejects_empty_id() {
        let err = validate_new_investor(&InvestorId::new(""), Money::new(100)).unwrap_err();
        assert!(matches!(err, LedgerError::InvalidInput { .. }));
    }

    #[test_case(0; "zero balance")]
    #[test_case(-1; "negative balance")]
    fn new_investor_rejects_non_positive_balance(balance: i64) {
        let err =
            validate_new_investor(&InvestorId::new("inv-001"), Money::new(balance)).unwrap_err();
        assert!(matches!(
            err,
            LedgerError::InvalidInput { ref field, .. } if field == "balance"
        ));
    }

    #[test]
    fn new_investor_accepts_positive_balance() {
        assert!(validate_new_investor(&InvestorId::new("inv-001"), Money::new(1)).is_ok());
    }

    #[test]
    fn subscription_rejects_oversized_request() {
        let asset = make_asset(40);
        let investor = make_investor(100_000);

        let err = validate_subscription(&asset, &investor, Units::new(41)).unwrap_err();
        assert!(matches!(err, LedgerError::InsufficientSupply { .. }));
    }

    #[test]
    fn subscription_rejects_cost_above_balance() {
        let asset = make_asset(1000);
        let investor = make_investor(100);

        let err = validate_subscription(&asset, &investor, Units::new(2)).unwrap_err();
        match err {
            LedgerError::InsufficientBalance {
                required,
                available,
                ..
            } => {
                assert_eq!(required, Money::new(200));
                assert_eq!(available, Money::new(100));
            }
            other => panic!("expected InsufficientBalance, got {other:?}"),
        }
    }

    #[test]
    fn subscription_returns_cost() {
        let asset = make_asset(1000);
        let investor = make_investor(100_000);

        let cost = validate_subscription(&asset, &investor, Units::new(50)).unwrap();
        assert_eq!(cost, Money::new(5000));
    }

    #[test]
    fn subscription_has_no_minimum_size() {
        let asset = make_asset(1000);
        let investor = make_investor(100_000);

        assert!(validate_subscription(&asset, &investor, Units::new(1)).is_ok());
    }

    #[test_case(29; "just below minimum")]
    #[test_case(1; "single unit")]
    fn redemption_rejects_undersized_regardless_of_holdings(units: i64) {
        // No holdings at all: the size check still fires first.
        let investor = make_investor(100_000);

        let err = validate_redemption(
            &investor,
            &Isin::new("US1"),
            Units::new(units),
            Timestamp::new(i64::MAX - 1),
            LockInPeriod::default(),
        )
        .unwrap_err();

        assert!(matches!(err, LedgerError::BelowMinimumRedemption { .. }));
    }

    #[test]
    fn redemption_rejects_units_above_holdings() {
        let investor = make_subscribed_investor(50, 1000);

        let err = validate_redemption(
            &investor,
            &Isin::new("US1"),
            Units::new(60),
            Timestamp::new(i64::MAX - 1),
            LockInPeriod::default(),
        )
        .unwrap_err();

        assert!(matches!(err, LedgerError::InsufficientHoldings { .. }));
    }

    #[test]
    fn redemption_lock_in_boundary_is_inclusive() {
        let investor = make_subscribed_investor(50, 1000);
        let isin = Isin::new("US1");
        let lock_in = LockInPeriod::default();

        // One second before expiry: still locked.
        let err = validate_redemption(
            &investor,
            &isin,
            Units::new(50),
            Timestamp::new(1000 + 604_799),
            lock_in,
        )
        .unwrap_err();
        assert!(matches!(err, LedgerError::LockInActive { .. }));

        // Exactly at expiry: allowed.
        assert!(
            validate_redemption(
                &investor,
                &isin,
                Units::new(50),
                Timestamp::new(1000 + 604_800),
                lock_in,
            )
            .is_ok()
        );
    }

    #[test]
    fn redemption_minimum_boundary() {
        let investor = make_subscribed_investor(50, 1000);
        let isin = Isin::new("US1");
        let aged = Timestamp::new(1000 + 604_800);

        let err = validate_redemption(
            &investor,
            &isin,
            Units::new(29),
            aged,
            LockInPeriod::default(),
        )
        .unwrap_err();
        assert!(matches!(err, LedgerError::BelowMinimumRedemption { .. }));

        assert!(
            validate_redemption(
                &investor,
                &isin,
                Units::new(30),
                aged,
                LockInPeriod::default(),
            )
            .is_ok()
        );
    }

    #[test]
    fn redemption_lock_in_error_reports_expiry() {
        let investor = make_subscribed_investor(50, 1000);

        let err = validate_redemption(
            &investor,
            &Isin::new("US1"),
            Units::new(50),
            Timestamp::new(2000),
            LockInPeriod::default(),
        )
        .unwrap_err();

        match err {
            LedgerError::LockInActive { unlocks_at, now, .. } => {
                assert_eq!(unlocks_at, Timestamp::new(1000 + 604_800));
                assert_eq!(now, Timestamp::new(2000));
            }
            other => panic!("expected LockInActive, got {other:?}"),
        }
    }

    #[test]
    fn shorter_lock_in_applies() {
        let investor = make_subscribed_investor(50, 1000);

        assert!(
            validate_redemption(
                &investor,
                &Isin::new("US1"),
                Units::new(50),
                Timestamp::new(1060),
                LockInPeriod::from_seconds(60),
            )
            .is_ok()
        );
    }
}
