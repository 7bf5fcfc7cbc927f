//! Portfolio read model returned by GetPortfolio.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::asset_subscription::aggregate::Investor;
use crate::domain::shared::{Isin, Money, Units};

/// An investor's balance and per-asset positions.
///
/// Holdings are copied out of the record; a value handed to a caller
/// never aliases ledger state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioDto {
    /// Cash balance.
    pub balance: Money,
    /// Units held per ISIN. Fully redeemed positions appear with zero.
    pub portfolio: BTreeMap<Isin, Units>,
}

impl PortfolioDto {
    /// Build from an investor record.
    #[must_use]
    pub fn from_investor(investor: &Investor) -> Self {
        Self {
            balance: investor.balance(),
            portfolio: investor.holdings().clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::asset_subscription::aggregate::CreateInvestorCommand;
    use crate::domain::shared::{InvestorId, Timestamp};

    #[test]
    fn copies_holdings_out_of_the_record() {
        let mut investor = Investor::open(CreateInvestorCommand {
            investor_id: InvestorId::new("inv-001"),
            balance: Money::new(10_000),
        })
        .unwrap();
        investor
            .apply_subscription(
                &Isin::new("US1"),
                Units::new(50),
                Money::new(5000),
                Timestamp::new(1000),
            )
            .unwrap();

        let dto = PortfolioDto::from_investor(&investor);

        assert_eq!(dto.balance, Money::new(5000));
        assert_eq!(dto.portfolio.get(&Isin::new("US1")), Some(&Units::new(50)));

        // Mutating the record afterwards must not reach the copy.
        investor
            .apply_redemption(&Isin::new("US1"), Units::new(50), Money::new(5000))
            .unwrap();
        assert_eq!(dto.portfolio.get(&Isin::new("US1")), Some(&Units::new(50)));
    }

    #[test]
    fn response_shape() {
        let investor = Investor::open(CreateInvestorCommand {
            investor_id: InvestorId::new("inv-001"),
            balance: Money::new(10_000),
        })
        .unwrap();

        let json = serde_json::to_string(&PortfolioDto::from_investor(&investor)).unwrap();
        assert_eq!(json, r#"{"balance":10000,"portfolio":{}}"#);
    }
}
