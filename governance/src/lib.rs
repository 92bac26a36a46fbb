//! Validation engine for exchange governance proposals.
//!
//! Each proposal kind carries its own `validate` method. Validation is pure
//! and fail-fast: the first violated invariant is returned as a
//! [`ValidationError`]. [`ProposalRegistry`] maps wire type tags to payload
//! decoders and is the only place that logs.

pub mod batch;
pub mod checks;
pub mod community_pool;
pub mod error;
pub mod fee_discount;
pub mod launch;
pub mod oracle;
pub mod params;
pub mod proposal;
pub mod registry;
pub mod rewards;
pub mod settlement;
pub mod spans;
pub mod update;

pub use batch::BatchExchangeModificationProposal;
pub use community_pool::{BatchCommunityPoolSpendProposal, CommunityPoolSpendProposal};
pub use error::{ConfigError, ErrorKind, ValidationError};
pub use fee_discount::{FeeDiscountProposal, FeeDiscountSchedule, FeeDiscountTierInfo};
pub use launch::{
    BinaryOptionsMarketLaunchProposal, ExpiryFuturesMarketLaunchProposal,
    PerpetualMarketLaunchProposal, SpotMarketLaunchProposal,
};
pub use oracle::{OracleParams, ProviderOracleParams};
pub use params::ValidationParams;
pub use proposal::ProposalContent;
pub use registry::{Decoder, ProposalRegistry};
pub use rewards::{
    validate_campaign_reward_pool, validate_reward_pool_sequence, CampaignRewardPool,
    PointsMultiplier, RewardPointUpdate, TradingRewardCampaignBoostInfo,
    TradingRewardCampaignInfo, TradingRewardCampaignLaunchProposal,
    TradingRewardCampaignUpdateProposal, TradingRewardPendingPointsUpdateProposal,
};
pub use settlement::{DenomDecimals, MarketForcedSettlementProposal, UpdateDenomDecimalsProposal};
pub use update::{
    BinaryOptionsMarketParamUpdateProposal, DerivativeMarketParamUpdateProposal,
    ExchangeEnableProposal, SpotMarketParamUpdateProposal,
};
