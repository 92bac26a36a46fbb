//! Several exchange proposals enacted together.

use crate::checks::validate_abstract;
use crate::error::ValidationError;
use crate::launch::{
    BinaryOptionsMarketLaunchProposal, ExpiryFuturesMarketLaunchProposal,
    PerpetualMarketLaunchProposal, SpotMarketLaunchProposal,
};
use crate::params::ValidationParams;
use crate::rewards::TradingRewardCampaignUpdateProposal;
use crate::settlement::UpdateDenomDecimalsProposal;
use crate::update::{
    BinaryOptionsMarketParamUpdateProposal, DerivativeMarketParamUpdateProposal,
    SpotMarketParamUpdateProposal,
};
use serde::{Deserialize, Serialize};

/// Members are validated in field order and the first failure is returned
/// unchanged; the batch's own title and description are checked last.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchExchangeModificationProposal {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub spot_market_param_update_proposals: Vec<SpotMarketParamUpdateProposal>,
    #[serde(default)]
    pub derivative_market_param_update_proposals: Vec<DerivativeMarketParamUpdateProposal>,
    #[serde(default)]
    pub spot_market_launch_proposals: Vec<SpotMarketLaunchProposal>,
    #[serde(default)]
    pub perpetual_market_launch_proposals: Vec<PerpetualMarketLaunchProposal>,
    #[serde(default)]
    pub expiry_futures_market_launch_proposals: Vec<ExpiryFuturesMarketLaunchProposal>,
    #[serde(default)]
    pub trading_reward_campaign_update_proposal: Option<TradingRewardCampaignUpdateProposal>,
    #[serde(default)]
    pub binary_options_market_launch_proposals: Vec<BinaryOptionsMarketLaunchProposal>,
    #[serde(default)]
    pub binary_options_param_update_proposals: Vec<BinaryOptionsMarketParamUpdateProposal>,
    #[serde(default)]
    pub denom_decimals_update_proposal: Option<UpdateDenomDecimalsProposal>,
}

impl BatchExchangeModificationProposal {
    pub fn validate(&self, params: &ValidationParams) -> Result<(), ValidationError> {
        for p in &self.spot_market_param_update_proposals {
            p.validate(params)?;
        }
        for p in &self.derivative_market_param_update_proposals {
            p.validate(params)?;
        }
        for p in &self.spot_market_launch_proposals {
            p.validate(params)?;
        }
        for p in &self.perpetual_market_launch_proposals {
            p.validate(params)?;
        }
        for p in &self.expiry_futures_market_launch_proposals {
            p.validate(params)?;
        }
        if let Some(p) = &self.trading_reward_campaign_update_proposal {
            p.validate(params)?;
        }
        for p in &self.binary_options_market_launch_proposals {
            p.validate(params)?;
        }
        for p in &self.binary_options_param_update_proposals {
            p.validate(params)?;
        }
        if let Some(p) = &self.denom_decimals_update_proposal {
            p.validate(params)?;
        }
        validate_abstract(&self.title, &self.description, params)
    }
}
