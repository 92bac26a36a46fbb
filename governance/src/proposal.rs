//! The closed set of exchange governance proposals.

use crate::batch::BatchExchangeModificationProposal;
use crate::community_pool::BatchCommunityPoolSpendProposal;
use crate::error::ValidationError;
use crate::fee_discount::FeeDiscountProposal;
use crate::launch::{
    BinaryOptionsMarketLaunchProposal, ExpiryFuturesMarketLaunchProposal,
    PerpetualMarketLaunchProposal, SpotMarketLaunchProposal,
};
use crate::params::ValidationParams;
use crate::rewards::{
    TradingRewardCampaignLaunchProposal, TradingRewardCampaignUpdateProposal,
    TradingRewardPendingPointsUpdateProposal,
};
use crate::settlement::{MarketForcedSettlementProposal, UpdateDenomDecimalsProposal};
use crate::update::{
    BinaryOptionsMarketParamUpdateProposal, DerivativeMarketParamUpdateProposal,
    ExchangeEnableProposal, SpotMarketParamUpdateProposal,
};
use serde::{Deserialize, Serialize};

/// Route of every exchange proposal.
pub const ROUTER_KEY: &str = "exchange";

pub const PROPOSAL_TYPE_EXCHANGE_ENABLE: &str = "ProposalTypeExchangeEnable";
pub const PROPOSAL_TYPE_BATCH_EXCHANGE_MODIFICATION: &str = "ProposalTypeBatchExchangeModification";
pub const PROPOSAL_TYPE_SPOT_MARKET_PARAM_UPDATE: &str = "ProposalTypeSpotMarketParamUpdate";
pub const PROPOSAL_TYPE_SPOT_MARKET_LAUNCH: &str = "ProposalTypeSpotMarketLaunch";
pub const PROPOSAL_TYPE_PERPETUAL_MARKET_LAUNCH: &str = "ProposalTypePerpetualMarketLaunch";
pub const PROPOSAL_TYPE_EXPIRY_FUTURES_MARKET_LAUNCH: &str =
    "ProposalTypeExpiryFuturesMarketLaunch";
pub const PROPOSAL_TYPE_DERIVATIVE_MARKET_PARAM_UPDATE: &str =
    "ProposalTypeDerivativeMarketParamUpdate";
pub const PROPOSAL_TYPE_MARKET_FORCED_SETTLEMENT: &str = "ProposalTypeMarketForcedSettlement";
pub const PROPOSAL_TYPE_UPDATE_DENOM_DECIMALS: &str = "ProposalUpdateDenomDecimals";
pub const PROPOSAL_TYPE_TRADING_REWARD_CAMPAIGN: &str = "ProposalTypeTradingRewardCampaign";
pub const PROPOSAL_TYPE_TRADING_REWARD_CAMPAIGN_UPDATE: &str =
    "ProposalTypeTradingRewardCampaignUpdateProposal";
pub const PROPOSAL_TYPE_TRADING_REWARD_POINTS_UPDATE: &str =
    "ProposalTypeTradingRewardPointsUpdateProposal";
pub const PROPOSAL_TYPE_FEE_DISCOUNT: &str = "ProposalTypeFeeDiscountProposal";
pub const PROPOSAL_TYPE_BATCH_COMMUNITY_POOL_SPEND: &str =
    "ProposalTypeBatchCommunityPoolSpendProposal";
pub const PROPOSAL_TYPE_BINARY_OPTIONS_MARKET_LAUNCH: &str =
    "ProposalTypeBinaryOptionsMarketLaunch";
pub const PROPOSAL_TYPE_BINARY_OPTIONS_MARKET_PARAM_UPDATE: &str =
    "ProposalTypeBinaryOptionsMarketParamUpdate";

/// What an exchange governance proposal changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ProposalContent {
    /// Switch on spot or derivatives trading.
    ExchangeEnable(ExchangeEnableProposal),
    /// Several exchange proposals enacted together.
    BatchExchangeModification(BatchExchangeModificationProposal),
    SpotMarketParamUpdate(SpotMarketParamUpdateProposal),
    SpotMarketLaunch(SpotMarketLaunchProposal),
    PerpetualMarketLaunch(PerpetualMarketLaunchProposal),
    ExpiryFuturesMarketLaunch(ExpiryFuturesMarketLaunchProposal),
    /// Applies to perpetual and expiry futures markets alike.
    DerivativeMarketParamUpdate(DerivativeMarketParamUpdateProposal),
    MarketForcedSettlement(MarketForcedSettlementProposal),
    UpdateDenomDecimals(UpdateDenomDecimalsProposal),
    TradingRewardCampaignLaunch(TradingRewardCampaignLaunchProposal),
    TradingRewardCampaignUpdate(TradingRewardCampaignUpdateProposal),
    TradingRewardPendingPointsUpdate(TradingRewardPendingPointsUpdateProposal),
    FeeDiscount(FeeDiscountProposal),
    /// Community-pool payouts bundled into one vote.
    BatchCommunityPoolSpend(BatchCommunityPoolSpendProposal),
    BinaryOptionsMarketLaunch(BinaryOptionsMarketLaunchProposal),
    BinaryOptionsMarketParamUpdate(BinaryOptionsMarketParamUpdateProposal),
}

impl ProposalContent {
    /// Runs the validator for this kind of proposal.
    pub fn validate(&self, params: &ValidationParams) -> Result<(), ValidationError> {
        match self {
            Self::ExchangeEnable(p) => p.validate(params),
            Self::BatchExchangeModification(p) => p.validate(params),
            Self::SpotMarketParamUpdate(p) => p.validate(params),
            Self::SpotMarketLaunch(p) => p.validate(params),
            Self::PerpetualMarketLaunch(p) => p.validate(params),
            Self::ExpiryFuturesMarketLaunch(p) => p.validate(params),
            Self::DerivativeMarketParamUpdate(p) => p.validate(params),
            Self::MarketForcedSettlement(p) => p.validate(params),
            Self::UpdateDenomDecimals(p) => p.validate(params),
            Self::TradingRewardCampaignLaunch(p) => p.validate(params),
            Self::TradingRewardCampaignUpdate(p) => p.validate(params),
            Self::TradingRewardPendingPointsUpdate(p) => p.validate(params),
            Self::FeeDiscount(p) => p.validate(params),
            Self::BatchCommunityPoolSpend(p) => p.validate(params),
            Self::BinaryOptionsMarketLaunch(p) => p.validate(params),
            Self::BinaryOptionsMarketParamUpdate(p) => p.validate(params),
        }
    }

    /// Tag this kind is registered under.
    pub fn type_tag(&self) -> &'static str {
        match self {
            Self::ExchangeEnable(_) => PROPOSAL_TYPE_EXCHANGE_ENABLE,
            Self::BatchExchangeModification(_) => PROPOSAL_TYPE_BATCH_EXCHANGE_MODIFICATION,
            Self::SpotMarketParamUpdate(_) => PROPOSAL_TYPE_SPOT_MARKET_PARAM_UPDATE,
            Self::SpotMarketLaunch(_) => PROPOSAL_TYPE_SPOT_MARKET_LAUNCH,
            Self::PerpetualMarketLaunch(_) => PROPOSAL_TYPE_PERPETUAL_MARKET_LAUNCH,
            Self::ExpiryFuturesMarketLaunch(_) => PROPOSAL_TYPE_EXPIRY_FUTURES_MARKET_LAUNCH,
            Self::DerivativeMarketParamUpdate(_) => PROPOSAL_TYPE_DERIVATIVE_MARKET_PARAM_UPDATE,
            Self::MarketForcedSettlement(_) => PROPOSAL_TYPE_MARKET_FORCED_SETTLEMENT,
            Self::UpdateDenomDecimals(_) => PROPOSAL_TYPE_UPDATE_DENOM_DECIMALS,
            Self::TradingRewardCampaignLaunch(_) => PROPOSAL_TYPE_TRADING_REWARD_CAMPAIGN,
            Self::TradingRewardCampaignUpdate(_) => PROPOSAL_TYPE_TRADING_REWARD_CAMPAIGN_UPDATE,
            Self::TradingRewardPendingPointsUpdate(_) => PROPOSAL_TYPE_TRADING_REWARD_POINTS_UPDATE,
            Self::FeeDiscount(_) => PROPOSAL_TYPE_FEE_DISCOUNT,
            Self::BatchCommunityPoolSpend(_) => PROPOSAL_TYPE_BATCH_COMMUNITY_POOL_SPEND,
            Self::BinaryOptionsMarketLaunch(_) => PROPOSAL_TYPE_BINARY_OPTIONS_MARKET_LAUNCH,
            Self::BinaryOptionsMarketParamUpdate(_) => {
                PROPOSAL_TYPE_BINARY_OPTIONS_MARKET_PARAM_UPDATE
            }
        }
    }

    pub fn route(&self) -> &'static str {
        ROUTER_KEY
    }

    pub fn title(&self) -> &str {
        self.abstract_fields().0
    }

    pub fn description(&self) -> &str {
        self.abstract_fields().1
    }

    fn abstract_fields(&self) -> (&str, &str) {
        match self {
            Self::ExchangeEnable(p) => (&p.title, &p.description),
            Self::BatchExchangeModification(p) => (&p.title, &p.description),
            Self::SpotMarketParamUpdate(p) => (&p.title, &p.description),
            Self::SpotMarketLaunch(p) => (&p.title, &p.description),
            Self::PerpetualMarketLaunch(p) => (&p.title, &p.description),
            Self::ExpiryFuturesMarketLaunch(p) => (&p.title, &p.description),
            Self::DerivativeMarketParamUpdate(p) => (&p.title, &p.description),
            Self::MarketForcedSettlement(p) => (&p.title, &p.description),
            Self::UpdateDenomDecimals(p) => (&p.title, &p.description),
            Self::TradingRewardCampaignLaunch(p) => (&p.title, &p.description),
            Self::TradingRewardCampaignUpdate(p) => (&p.title, &p.description),
            Self::TradingRewardPendingPointsUpdate(p) => (&p.title, &p.description),
            Self::FeeDiscount(p) => (&p.title, &p.description),
            Self::BatchCommunityPoolSpend(p) => (&p.title, &p.description),
            Self::BinaryOptionsMarketLaunch(p) => (&p.title, &p.description),
            Self::BinaryOptionsMarketParamUpdate(p) => (&p.title, &p.description),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use dexgov_types::{ExchangeType, MarketId};

    #[test]
    fn dispatches_to_variant_validator() {
        let params = ValidationParams::default();
        let content = ProposalContent::MarketForcedSettlement(MarketForcedSettlementProposal {
            title: "Settle".into(),
            description: "Settle now".into(),
            market_id: "not-a-market".into(),
            settlement_price: None,
        });
        assert_eq!(content.validate(&params).unwrap_err().kind(), ErrorKind::InvalidFormat);
        assert_eq!(content.type_tag(), "ProposalTypeMarketForcedSettlement");
        assert_eq!(content.route(), "exchange");
        assert_eq!(content.title(), "Settle");
        assert_eq!(content.description(), "Settle now");

        let content = ProposalContent::MarketForcedSettlement(MarketForcedSettlementProposal {
            title: "Settle".into(),
            description: "Settle now".into(),
            market_id: MarketId::new([9; 32]).to_hex(),
            settlement_price: None,
        });
        assert!(content.validate(&params).is_ok());
    }

    #[test]
    fn campaign_update_has_its_own_tag() {
        let content = ProposalContent::TradingRewardCampaignUpdate(
            TradingRewardCampaignUpdateProposal {
                title: "t".into(),
                description: "d".into(),
                campaign_info: None,
                campaign_reward_pools_additions: vec![],
                campaign_reward_pools_updates: vec![],
            },
        );
        assert_eq!(content.type_tag(), PROPOSAL_TYPE_TRADING_REWARD_CAMPAIGN_UPDATE);
    }

    #[test]
    fn exchange_enable_abstract() {
        let content = ProposalContent::ExchangeEnable(ExchangeEnableProposal {
            title: "Enable".into(),
            description: "Derivatives".into(),
            exchange_type: ExchangeType::Derivatives,
        });
        assert!(content.validate(&ValidationParams::default()).is_ok());
        assert_eq!(content.title(), "Enable");
    }
}
