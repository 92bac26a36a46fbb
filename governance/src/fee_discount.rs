//! Staking/volume based fee-discount schedules.

use crate::checks::{find_duplicate, validate_abstract, validate_market_ids};
use crate::error::ValidationError;
use crate::params::{
    ValidationParams, MIN_FEE_DISCOUNT_BUCKET_COUNT, MIN_FEE_DISCOUNT_BUCKET_DURATION_SECS,
};
use dexgov_types::{safe_is_non_negative, safe_is_positive, Decimal, Int};
use serde::{Deserialize, Serialize};

/// One rung of the discount ladder.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeDiscountTierInfo {
    #[serde(default)]
    pub maker_discount_rate: Option<Decimal>,
    #[serde(default)]
    pub taker_discount_rate: Option<Decimal>,
    #[serde(default)]
    pub staked_amount: Option<Int>,
    #[serde(default)]
    pub volume: Option<Decimal>,
}

impl FeeDiscountTierInfo {
    pub fn new(maker: Decimal, taker: Decimal, staked_amount: Int, volume: Decimal) -> Self {
        Self {
            maker_discount_rate: Some(maker),
            taker_discount_rate: Some(taker),
            staked_amount: Some(staked_amount),
            volume: Some(volume),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_discount_rate("maker_discount_rate", self.maker_discount_rate.as_ref())?;
        validate_discount_rate("taker_discount_rate", self.taker_discount_rate.as_ref())?;
        if !safe_is_positive(self.staked_amount.as_ref()) {
            return Err(ValidationError::range("staked_amount", "must be positive"));
        }
        if !safe_is_positive(self.volume.as_ref()) {
            return Err(ValidationError::range("volume", "must be positive"));
        }
        Ok(())
    }

    /// Fails on the first column in which `self` is lower than `prev`.
    fn check_follows(&self, prev: &Self, tier: usize) -> Result<(), ValidationError> {
        fn column<T: PartialOrd>(
            field: &'static str,
            prev: Option<&T>,
            next: Option<&T>,
            tier: usize,
        ) -> Result<(), ValidationError> {
            match (prev, next) {
                (Some(p), Some(n)) if p > n => Err(ValidationError::sequence(
                    field,
                    format!("tier {tier} is lower than tier {}", tier - 1),
                )),
                _ => Ok(()),
            }
        }

        column(
            "maker_discount_rate",
            prev.maker_discount_rate.as_ref(),
            self.maker_discount_rate.as_ref(),
            tier,
        )?;
        column(
            "taker_discount_rate",
            prev.taker_discount_rate.as_ref(),
            self.taker_discount_rate.as_ref(),
            tier,
        )?;
        column(
            "staked_amount",
            prev.staked_amount.as_ref(),
            self.staked_amount.as_ref(),
            tier,
        )?;
        column("volume", prev.volume.as_ref(), self.volume.as_ref(), tier)
    }
}

fn validate_discount_rate(field: &'static str, v: Option<&Decimal>) -> Result<(), ValidationError> {
    if !safe_is_non_negative(v) || v.is_some_and(|v| *v > Decimal::ONE) {
        return Err(ValidationError::range(field, "must be between 0 and 1"));
    }
    Ok(())
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeDiscountSchedule {
    pub bucket_count: u64,
    pub bucket_duration: i64,
    #[serde(default)]
    pub quote_denoms: Vec<String>,
    #[serde(default)]
    pub tier_infos: Vec<FeeDiscountTierInfo>,
    #[serde(default)]
    pub disqualified_market_ids: Vec<String>,
}

impl FeeDiscountSchedule {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.bucket_count < MIN_FEE_DISCOUNT_BUCKET_COUNT {
            return Err(ValidationError::range(
                "bucket_count",
                format!(
                    "{} is below the minimum of {MIN_FEE_DISCOUNT_BUCKET_COUNT} buckets",
                    self.bucket_count
                ),
            ));
        }
        if self.bucket_duration < MIN_FEE_DISCOUNT_BUCKET_DURATION_SECS {
            return Err(ValidationError::range(
                "bucket_duration",
                format!(
                    "{} is below the minimum of {MIN_FEE_DISCOUNT_BUCKET_DURATION_SECS} seconds",
                    self.bucket_duration
                ),
            ));
        }
        if let Some(dup) = find_duplicate(&self.quote_denoms) {
            return Err(ValidationError::duplicate("quote_denoms", dup));
        }
        validate_market_ids("disqualified_market_ids", &self.disqualified_market_ids)?;
        if self.tier_infos.is_empty() {
            return Err(ValidationError::MissingField {
                field: "tier_infos",
            });
        }

        self.tier_infos
            .iter()
            .enumerate()
            .try_fold(None, |prev: Option<&FeeDiscountTierInfo>, (idx, tier)| {
                tier.validate()?;
                if let Some(prev) = prev {
                    tier.check_follows(prev, idx)?;
                }
                Ok::<_, ValidationError>(Some(tier))
            })
            .map(|_| ())
    }
}

/// Replace the fee-discount schedule.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeDiscountProposal {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub schedule: Option<FeeDiscountSchedule>,
}

impl FeeDiscountProposal {
    pub fn validate(&self, params: &ValidationParams) -> Result<(), ValidationError> {
        let Some(schedule) = &self.schedule else {
            return Err(ValidationError::MissingField { field: "schedule" });
        };
        schedule.validate()?;
        validate_abstract(&self.title, &self.description, params)
    }
}
