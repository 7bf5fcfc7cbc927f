//! Use Cases
//!
//! One use case per ledger operation. Each is generic over the ports
//! it consumes and executes as one atomic unit of work: load,
//! validate, mutate, stage, commit, emit.

mod create_investor;
mod get_portfolio;
mod records;
mod redeem_asset;
mod register_asset;
mod subscribe_asset;

pub use create_investor::CreateInvestorUseCase;
pub use get_portfolio::GetPortfolioUseCase;
pub use redeem_asset::RedeemAssetUseCase;
pub use register_asset::RegisterAssetUseCase;
pub use subscribe_asset::SubscribeAssetUseCase;
