//! Bounds used by the proposal validators.
//!
//! Tunable bounds live in [`ValidationParams`], loadable from a TOML file;
//! fixed protocol bounds are plain constants.

use crate::error::ConfigError;
use dexgov_types::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Lowest maker fee rate; negative maker fees are rebates.
pub const MIN_MAKER_FEE_RATE: Decimal = dec!(-1);

/// Highest fee rate of any kind.
pub const MAX_FEE_RATE: Decimal = dec!(1);

/// Settlement price that demolishes a binary-options market with refunds.
pub const BINARY_OPTIONS_REFUND_FLAG_PRICE: Decimal = dec!(-1);

/// Highest price a binary-options market can settle at.
pub const MAX_BINARY_OPTIONS_PRICE: Decimal = dec!(1);

/// Fee-discount schedules track volume over at least this many buckets.
pub const MIN_FEE_DISCOUNT_BUCKET_COUNT: u64 = 2;

/// Shortest fee-discount bucket, in seconds.
pub const MIN_FEE_DISCOUNT_BUCKET_DURATION_SECS: i64 = 10;

/// Tunable validation bounds.
///
/// Can be loaded from a TOML file via [`ValidationParams::from_toml_file`] or
/// built programmatically (e.g. for tests). Missing keys take their defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValidationParams {
    /// Longest accepted market ticker, in bytes.
    #[serde(default = "default_max_ticker_length")]
    pub max_ticker_length: usize,

    /// Ceiling for oracle scale factors and denom decimals.
    #[serde(default = "default_max_oracle_scale_factor")]
    pub max_oracle_scale_factor: u32,

    /// Longest accepted proposal title, in bytes.
    #[serde(default = "default_max_title_length")]
    pub max_title_length: usize,

    /// Longest accepted proposal description, in bytes.
    #[serde(default = "default_max_description_length")]
    pub max_description_length: usize,

    /// Human-readable part every account address must carry.
    #[serde(default = "default_account_address_prefix")]
    pub account_address_prefix: String,

    /// Upper bound for a derivative market's hourly interest rate.
    #[serde(default = "default_max_hourly_interest_rate")]
    pub max_hourly_interest_rate: Decimal,

    /// Upper bound for a derivative market's hourly funding rate cap.
    #[serde(default = "default_max_hourly_funding_rate_cap")]
    pub max_hourly_funding_rate_cap: Decimal,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_max_ticker_length() -> usize {
    30
}

fn default_max_oracle_scale_factor() -> u32 {
    18
}

fn default_max_title_length() -> usize {
    140
}

fn default_max_description_length() -> usize {
    10_000
}

fn default_account_address_prefix() -> String {
    "gtb".to_string()
}

fn default_max_hourly_interest_rate() -> Decimal {
    dec!(0.01)
}

fn default_max_hourly_funding_rate_cap() -> Decimal {
    dec!(0.03)
}

// ── Impl ───────────────────────────────────────────────────────────────

impl ValidationParams {
    /// Load parameters from a TOML file.
    pub fn from_toml_file(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse parameters from a TOML string and check them.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let params: Self = toml::from_str(s)?;
        params.check()?;
        Ok(params)
    }

    /// Serialize the parameters to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Reject parameter sets no proposal could ever satisfy.
    pub fn check(&self) -> Result<(), ConfigError> {
        let invalid = |field: &'static str, reason: &str| -> Result<(), ConfigError> {
            Err(ConfigError::Invalid {
                field,
                reason: reason.to_string(),
            })
        };
        if self.max_ticker_length == 0 {
            return invalid("max_ticker_length", "must be positive");
        }
        if self.max_oracle_scale_factor == 0 {
            return invalid("max_oracle_scale_factor", "must be positive");
        }
        if self.max_title_length == 0 {
            return invalid("max_title_length", "must be positive");
        }
        if self.max_description_length == 0 {
            return invalid("max_description_length", "must be positive");
        }
        if self.account_address_prefix.is_empty()
            || self.account_address_prefix != self.account_address_prefix.to_ascii_lowercase()
        {
            return invalid("account_address_prefix", "must be non-empty lowercase");
        }
        if self.max_hourly_interest_rate.is_sign_negative() {
            return invalid("max_hourly_interest_rate", "cannot be negative");
        }
        if self.max_hourly_funding_rate_cap <= Decimal::ZERO {
            return invalid("max_hourly_funding_rate_cap", "must be positive");
        }
        Ok(())
    }
}

impl Default for ValidationParams {
    fn default() -> Self {
        Self {
            max_ticker_length: default_max_ticker_length(),
            max_oracle_scale_factor: default_max_oracle_scale_factor(),
            max_title_length: default_max_title_length(),
            max_description_length: default_max_description_length(),
            account_address_prefix: default_account_address_prefix(),
            max_hourly_interest_rate: default_max_hourly_interest_rate(),
            max_hourly_funding_rate_cap: default_max_hourly_funding_rate_cap(),
        }
    }
}
