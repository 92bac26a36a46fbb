//! Trading-reward campaigns: launch, update and pending-points corrections.

use crate::checks::{
    find_duplicate, find_duplicate_denom, validate_abstract, validate_account_address,
    validate_market_ids,
};
use crate::error::ValidationError;
use crate::params::ValidationParams;
use dexgov_types::{is_valid_denom, safe_is_positive, Coin, Decimal};
use serde::{Deserialize, Serialize};

/// Points multipliers for one boosted market.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsMultiplier {
    #[serde(default)]
    pub maker_points_multiplier: Option<Decimal>,
    #[serde(default)]
    pub taker_points_multiplier: Option<Decimal>,
}

impl PointsMultiplier {
    pub fn new(maker: Decimal, taker: Decimal) -> Self {
        Self {
            maker_points_multiplier: Some(maker),
            taker_points_multiplier: Some(taker),
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        validate_multiplier("maker_points_multiplier", self.maker_points_multiplier.as_ref())?;
        validate_multiplier("taker_points_multiplier", self.taker_points_multiplier.as_ref())
    }
}

fn validate_multiplier(field: &'static str, v: Option<&Decimal>) -> Result<(), ValidationError> {
    let Some(v) = v else {
        return Err(ValidationError::MissingField { field });
    };
    if !safe_is_positive(Some(v)) {
        return Err(ValidationError::range(field, format!("{v} must be positive")));
    }
    Ok(())
}

/// Markets whose trading earns boosted points, index-aligned with their multipliers.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradingRewardCampaignBoostInfo {
    #[serde(default)]
    pub boosted_spot_market_ids: Vec<String>,
    #[serde(default)]
    pub spot_market_multipliers: Vec<PointsMultiplier>,
    #[serde(default)]
    pub boosted_derivative_market_ids: Vec<String>,
    #[serde(default)]
    pub derivative_market_multipliers: Vec<PointsMultiplier>,
}

impl TradingRewardCampaignBoostInfo {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.boosted_spot_market_ids.len() != self.spot_market_multipliers.len() {
            return Err(ValidationError::relation(
                "boosted spot market ids must match spot market multipliers",
                format!(
                    "{} ids, {} multipliers",
                    self.boosted_spot_market_ids.len(),
                    self.spot_market_multipliers.len()
                ),
            ));
        }
        if self.boosted_derivative_market_ids.len() != self.derivative_market_multipliers.len() {
            return Err(ValidationError::relation(
                "boosted derivative market ids must match derivative market multipliers",
                format!(
                    "{} ids, {} multipliers",
                    self.boosted_derivative_market_ids.len(),
                    self.derivative_market_multipliers.len()
                ),
            ));
        }

        validate_market_ids("boosted_spot_market_ids", &self.boosted_spot_market_ids)?;
        validate_market_ids(
            "boosted_derivative_market_ids",
            &self.boosted_derivative_market_ids,
        )?;

        self.spot_market_multipliers
            .iter()
            .chain(&self.derivative_market_multipliers)
            .try_for_each(PointsMultiplier::validate)
    }
}

/// Campaign-wide settings shared by every reward pool.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradingRewardCampaignInfo {
    pub campaign_duration_seconds: i64,
    #[serde(default)]
    pub quote_denoms: Vec<String>,
    #[serde(default)]
    pub trading_reward_boost_info: Option<TradingRewardCampaignBoostInfo>,
    #[serde(default)]
    pub disqualified_market_ids: Vec<String>,
}

impl TradingRewardCampaignInfo {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.campaign_duration_seconds <= 0 {
            return Err(ValidationError::range(
                "campaign_duration_seconds",
                format!("{} must be positive", self.campaign_duration_seconds),
            ));
        }
        if self.quote_denoms.is_empty() {
            return Err(ValidationError::MissingField {
                field: "quote_denoms",
            });
        }
        if let Some(boost) = &self.trading_reward_boost_info {
            boost.validate()?;
        }
        validate_market_ids("disqualified_market_ids", &self.disqualified_market_ids)
    }
}

/// Rewards paid out for the campaign period starting at `start_timestamp`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignRewardPool {
    pub start_timestamp: i64,
    #[serde(default)]
    pub max_campaign_rewards: Vec<Coin>,
}

impl CampaignRewardPool {
    pub fn new(start_timestamp: i64, max_campaign_rewards: Vec<Coin>) -> Self {
        Self {
            start_timestamp,
            max_campaign_rewards,
        }
    }
}

/// Validates one pool against the start of the pool before it and returns
/// this pool's start, to be threaded into the next call.
///
/// `prev_start == 0` means `pool` is the first of its sequence; any later pool
/// must begin exactly one campaign duration after its predecessor.
pub fn validate_campaign_reward_pool(
    pool: Option<&CampaignRewardPool>,
    campaign_duration_seconds: i64,
    prev_start: i64,
) -> Result<i64, ValidationError> {
    let Some(pool) = pool else {
        return Err(ValidationError::MissingField {
            field: "campaign_reward_pool",
        });
    };

    if pool.start_timestamp <= prev_start {
        return Err(ValidationError::sequence(
            "start_timestamp",
            format!(
                "reward pool start {} must be after previous start {prev_start}",
                pool.start_timestamp
            ),
        ));
    }
    if prev_start != 0 {
        let expected = prev_start.checked_add(campaign_duration_seconds);
        if expected != Some(pool.start_timestamp) {
            return Err(ValidationError::sequence(
                "start_timestamp",
                format!(
                    "reward pool start {} does not follow {prev_start} by the campaign duration {campaign_duration_seconds}",
                    pool.start_timestamp
                ),
            ));
        }
    }

    if let Some(denom) = find_duplicate_denom(&pool.max_campaign_rewards) {
        return Err(ValidationError::duplicate("max_campaign_rewards", denom));
    }
    for coin in &pool.max_campaign_rewards {
        if !is_valid_denom(&coin.denom) {
            return Err(ValidationError::format(
                "max_campaign_rewards",
                format!("invalid coin {coin}"),
            ));
        }
        if !safe_is_positive(coin.amount.as_ref()) {
            return Err(ValidationError::range(
                "max_campaign_rewards",
                format!("reward {coin} must be positive"),
            ));
        }
    }

    Ok(pool.start_timestamp)
}

/// Folds [`validate_campaign_reward_pool`] over `pools` in order, starting
/// from `0`. Returns the start timestamp of the last pool.
pub fn validate_reward_pool_sequence<'a>(
    pools: impl IntoIterator<Item = Option<&'a CampaignRewardPool>>,
    campaign_duration_seconds: i64,
) -> Result<i64, ValidationError> {
    pools.into_iter().try_fold(0, |prev_start, pool| {
        validate_campaign_reward_pool(pool, campaign_duration_seconds, prev_start)
    })
}

/// Start a new trading-reward campaign.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradingRewardCampaignLaunchProposal {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub campaign_info: Option<TradingRewardCampaignInfo>,
    #[serde(default)]
    pub campaign_reward_pools: Vec<Option<CampaignRewardPool>>,
}

impl TradingRewardCampaignLaunchProposal {
    /// Builds the proposal and validates it.
    pub fn try_new(
        title: impl Into<String>,
        description: impl Into<String>,
        campaign_info: TradingRewardCampaignInfo,
        campaign_reward_pools: Vec<CampaignRewardPool>,
        params: &ValidationParams,
    ) -> Result<Self, ValidationError> {
        let proposal =
            Self::new_unchecked(title, description, campaign_info, campaign_reward_pools);
        proposal.validate(params)?;
        Ok(proposal)
    }

    /// Builds the proposal without validating it.
    pub fn new_unchecked(
        title: impl Into<String>,
        description: impl Into<String>,
        campaign_info: TradingRewardCampaignInfo,
        campaign_reward_pools: Vec<CampaignRewardPool>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            campaign_info: Some(campaign_info),
            campaign_reward_pools: campaign_reward_pools.into_iter().map(Some).collect(),
        }
    }

    pub fn validate(&self, params: &ValidationParams) -> Result<(), ValidationError> {
        let Some(info) = &self.campaign_info else {
            return Err(ValidationError::MissingField {
                field: "campaign_info",
            });
        };
        if self.campaign_reward_pools.is_empty() {
            return Err(ValidationError::MissingField {
                field: "campaign_reward_pools",
            });
        }
        info.validate()?;
        validate_reward_pool_sequence(
            self.campaign_reward_pools.iter().map(Option::as_ref),
            info.campaign_duration_seconds,
        )?;
        validate_abstract(&self.title, &self.description, params)
    }
}

/// Change the running campaign: new settings, appended pools, amended pools.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradingRewardCampaignUpdateProposal {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub campaign_info: Option<TradingRewardCampaignInfo>,
    #[serde(default)]
    pub campaign_reward_pools_additions: Vec<Option<CampaignRewardPool>>,
    #[serde(default)]
    pub campaign_reward_pools_updates: Vec<Option<CampaignRewardPool>>,
}

impl TradingRewardCampaignUpdateProposal {
    pub fn try_new(
        title: impl Into<String>,
        description: impl Into<String>,
        campaign_info: TradingRewardCampaignInfo,
        additions: Vec<CampaignRewardPool>,
        updates: Vec<CampaignRewardPool>,
        params: &ValidationParams,
    ) -> Result<Self, ValidationError> {
        let proposal = Self::new_unchecked(title, description, campaign_info, additions, updates);
        proposal.validate(params)?;
        Ok(proposal)
    }

    pub fn new_unchecked(
        title: impl Into<String>,
        description: impl Into<String>,
        campaign_info: TradingRewardCampaignInfo,
        additions: Vec<CampaignRewardPool>,
        updates: Vec<CampaignRewardPool>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            campaign_info: Some(campaign_info),
            campaign_reward_pools_additions: additions.into_iter().map(Some).collect(),
            campaign_reward_pools_updates: updates.into_iter().map(Some).collect(),
        }
    }

    pub fn validate(&self, params: &ValidationParams) -> Result<(), ValidationError> {
        let Some(info) = &self.campaign_info else {
            return Err(ValidationError::MissingField {
                field: "campaign_info",
            });
        };
        info.validate()?;

        // Additions and updates are independent sequences.
        validate_reward_pool_sequence(
            self.campaign_reward_pools_additions.iter().map(Option::as_ref),
            info.campaign_duration_seconds,
        )?;
        validate_reward_pool_sequence(
            self.campaign_reward_pools_updates.iter().map(Option::as_ref),
            info.campaign_duration_seconds,
        )?;

        validate_abstract(&self.title, &self.description, params)
    }
}

/// Corrected point balance for one account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardPointUpdate {
    pub account_address: String,
    #[serde(default)]
    pub new_points: Option<Decimal>,
}

impl RewardPointUpdate {
    pub fn new(account_address: impl Into<String>, new_points: Decimal) -> Self {
        Self {
            account_address: account_address.into(),
            new_points: Some(new_points),
        }
    }
}

/// Overwrite pending reward points for the pool starting at `pending_pool_timestamp`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradingRewardPendingPointsUpdateProposal {
    pub title: String,
    pub description: String,
    pub pending_pool_timestamp: i64,
    #[serde(default)]
    pub reward_point_updates: Vec<Option<RewardPointUpdate>>,
}

impl TradingRewardPendingPointsUpdateProposal {
    pub fn validate(&self, params: &ValidationParams) -> Result<(), ValidationError> {
        if self.reward_point_updates.is_empty() {
            return Err(ValidationError::MissingField {
                field: "reward_point_updates",
            });
        }
        if self.pending_pool_timestamp <= 0 {
            return Err(ValidationError::range(
                "pending_pool_timestamp",
                format!("{} must be positive", self.pending_pool_timestamp),
            ));
        }

        let mut addresses = Vec::with_capacity(self.reward_point_updates.len());
        for update in &self.reward_point_updates {
            let Some(update) = update else {
                return Err(ValidationError::MissingField {
                    field: "reward_point_update",
                });
            };
            validate_account_address("account_address", &update.account_address, params)?;
            match &update.new_points {
                None => return Err(ValidationError::MissingField { field: "new_points" }),
                Some(points) if *points < Decimal::ZERO => {
                    return Err(ValidationError::range(
                        "new_points",
                        format!("{points} cannot be negative"),
                    ))
                }
                Some(_) => {}
            }
            addresses.push(update.account_address.as_str());
        }
        if let Some(dup) = find_duplicate(&addresses) {
            return Err(ValidationError::duplicate("account_address", dup));
        }

        validate_abstract(&self.title, &self.description, params)
    }
}
