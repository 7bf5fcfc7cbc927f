//! Data transfer objects for the operation surface.

mod portfolio;
mod requests;

pub use portfolio::PortfolioDto;
pub use requests::{
    CreateInvestorRequest, RedemptionCommand, RedemptionRequest, RegisterAssetRequest,
    SubscriptionCommand, SubscriptionRequest,
};
