//! Market launch proposals: spot, perpetual, expiry futures, binary options.
//!
//! Every launch validator checks its payload in a fixed order and finishes
//! with the title/description check.

use crate::checks::{
    validate_abstract, validate_account_address, validate_denom, validate_expiry_relation,
    validate_fee, validate_fee_relation, validate_maker_fee, validate_margin_ratio,
    validate_margin_relation, validate_tick_size, validate_ticker,
};
use crate::error::ValidationError;
use crate::oracle::{validate_provider_oracle, OracleParams};
use crate::params::ValidationParams;
use dexgov_types::{Decimal, OracleType};
use serde::{Deserialize, Serialize};

/// Launch a spot market.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpotMarketLaunchProposal {
    pub title: String,
    pub description: String,
    pub ticker: String,
    pub base_denom: String,
    pub quote_denom: String,
    pub min_price_tick_size: Decimal,
    pub min_quantity_tick_size: Decimal,
    /// Fee overrides; either both set or both absent.
    #[serde(default)]
    pub maker_fee_rate: Option<Decimal>,
    #[serde(default)]
    pub taker_fee_rate: Option<Decimal>,
}

impl SpotMarketLaunchProposal {
    pub fn validate(&self, params: &ValidationParams) -> Result<(), ValidationError> {
        validate_ticker(&self.ticker, params)?;
        validate_denom("base_denom", &self.base_denom)?;
        validate_denom("quote_denom", &self.quote_denom)?;
        if self.base_denom == self.quote_denom {
            return Err(ValidationError::relation(
                "base and quote denoms must differ",
                format!("both are {}", self.base_denom),
            ));
        }

        validate_tick_size("min_price_tick_size", &self.min_price_tick_size)?;
        validate_tick_size("min_quantity_tick_size", &self.min_quantity_tick_size)?;

        if let Some(maker) = &self.maker_fee_rate {
            validate_maker_fee(maker)?;
        }
        if let Some(taker) = &self.taker_fee_rate {
            validate_fee("taker_fee_rate", taker)?;
        }
        match (&self.maker_fee_rate, &self.taker_fee_rate) {
            (Some(maker), Some(taker)) => validate_fee_relation(maker, taker)?,
            (None, None) => {}
            _ => {
                return Err(ValidationError::relation(
                    "maker and taker fee rates must be set together",
                    "only one of maker_fee_rate and taker_fee_rate is set",
                ))
            }
        }

        validate_abstract(&self.title, &self.description, params)
    }
}

/// Launch a perpetual futures market.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PerpetualMarketLaunchProposal {
    pub title: String,
    pub description: String,
    pub ticker: String,
    pub quote_denom: String,
    pub oracle_base: String,
    pub oracle_quote: String,
    #[serde(default)]
    pub oracle_scale_factor: u32,
    pub oracle_type: OracleType,
    pub initial_margin_ratio: Decimal,
    pub maintenance_margin_ratio: Decimal,
    pub maker_fee_rate: Decimal,
    pub taker_fee_rate: Decimal,
    pub min_price_tick_size: Decimal,
    pub min_quantity_tick_size: Decimal,
}

impl PerpetualMarketLaunchProposal {
    pub fn oracle_params(&self) -> OracleParams {
        OracleParams::new(
            self.oracle_base.clone(),
            self.oracle_quote.clone(),
            self.oracle_scale_factor,
            self.oracle_type,
        )
    }

    pub fn validate(&self, params: &ValidationParams) -> Result<(), ValidationError> {
        validate_ticker(&self.ticker, params)?;
        validate_denom("quote_denom", &self.quote_denom)?;
        self.oracle_params().validate(params)?;
        validate_derivative_terms(&DerivativeTerms {
            initial_margin_ratio: &self.initial_margin_ratio,
            maintenance_margin_ratio: &self.maintenance_margin_ratio,
            maker_fee_rate: &self.maker_fee_rate,
            taker_fee_rate: &self.taker_fee_rate,
            min_price_tick_size: &self.min_price_tick_size,
            min_quantity_tick_size: &self.min_quantity_tick_size,
        })?;
        validate_abstract(&self.title, &self.description, params)
    }
}

/// Launch an expiry futures market.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExpiryFuturesMarketLaunchProposal {
    pub title: String,
    pub description: String,
    pub ticker: String,
    pub quote_denom: String,
    pub oracle_base: String,
    pub oracle_quote: String,
    #[serde(default)]
    pub oracle_scale_factor: u32,
    pub oracle_type: OracleType,
    /// Expiry as a unix timestamp in seconds.
    pub expiry: i64,
    pub initial_margin_ratio: Decimal,
    pub maintenance_margin_ratio: Decimal,
    pub maker_fee_rate: Decimal,
    pub taker_fee_rate: Decimal,
    pub min_price_tick_size: Decimal,
    pub min_quantity_tick_size: Decimal,
}

impl ExpiryFuturesMarketLaunchProposal {
    pub fn oracle_params(&self) -> OracleParams {
        OracleParams::new(
            self.oracle_base.clone(),
            self.oracle_quote.clone(),
            self.oracle_scale_factor,
            self.oracle_type,
        )
    }

    pub fn validate(&self, params: &ValidationParams) -> Result<(), ValidationError> {
        validate_ticker(&self.ticker, params)?;
        validate_denom("quote_denom", &self.quote_denom)?;
        self.oracle_params().validate(params)?;
        if self.expiry <= 0 {
            return Err(ValidationError::range(
                "expiry",
                format!("expiry {} must be positive", self.expiry),
            ));
        }
        validate_derivative_terms(&DerivativeTerms {
            initial_margin_ratio: &self.initial_margin_ratio,
            maintenance_margin_ratio: &self.maintenance_margin_ratio,
            maker_fee_rate: &self.maker_fee_rate,
            taker_fee_rate: &self.taker_fee_rate,
            min_price_tick_size: &self.min_price_tick_size,
            min_quantity_tick_size: &self.min_quantity_tick_size,
        })?;
        validate_abstract(&self.title, &self.description, params)
    }
}

struct DerivativeTerms<'a> {
    initial_margin_ratio: &'a Decimal,
    maintenance_margin_ratio: &'a Decimal,
    maker_fee_rate: &'a Decimal,
    taker_fee_rate: &'a Decimal,
    min_price_tick_size: &'a Decimal,
    min_quantity_tick_size: &'a Decimal,
}

/// Fee, margin and tick checks common to perpetual and expiry futures launches.
fn validate_derivative_terms(t: &DerivativeTerms<'_>) -> Result<(), ValidationError> {
    validate_maker_fee(t.maker_fee_rate)?;
    validate_fee("taker_fee_rate", t.taker_fee_rate)?;
    validate_margin_ratio("initial_margin_ratio", t.initial_margin_ratio)?;
    validate_margin_ratio("maintenance_margin_ratio", t.maintenance_margin_ratio)?;
    validate_fee_relation(t.maker_fee_rate, t.taker_fee_rate)?;
    validate_margin_relation(t.initial_margin_ratio, t.maintenance_margin_ratio)?;
    validate_tick_size("min_price_tick_size", t.min_price_tick_size)?;
    validate_tick_size("min_quantity_tick_size", t.min_quantity_tick_size)
}

/// Launch a binary-options market settled by a provider oracle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BinaryOptionsMarketLaunchProposal {
    pub title: String,
    pub description: String,
    pub ticker: String,
    pub oracle_symbol: String,
    pub oracle_provider: String,
    pub oracle_type: OracleType,
    #[serde(default)]
    pub oracle_scale_factor: u32,
    pub expiration_timestamp: i64,
    pub settlement_timestamp: i64,
    /// Market admin; empty means none.
    #[serde(default)]
    pub admin: String,
    pub quote_denom: String,
    pub maker_fee_rate: Decimal,
    pub taker_fee_rate: Decimal,
    pub min_price_tick_size: Decimal,
    pub min_quantity_tick_size: Decimal,
}

impl BinaryOptionsMarketLaunchProposal {
    pub fn validate(&self, params: &ValidationParams) -> Result<(), ValidationError> {
        validate_ticker(&self.ticker, params)?;
        validate_provider_oracle(
            &self.oracle_symbol,
            &self.oracle_provider,
            self.oracle_type,
            self.oracle_scale_factor,
            params,
        )?;
        validate_expiry_relation(self.expiration_timestamp, self.settlement_timestamp)?;
        if !self.admin.is_empty() {
            validate_account_address("admin", &self.admin, params)?;
        }
        validate_denom("quote_denom", &self.quote_denom)?;
        validate_maker_fee(&self.maker_fee_rate)?;
        validate_fee("taker_fee_rate", &self.taker_fee_rate)?;
        validate_fee_relation(&self.maker_fee_rate, &self.taker_fee_rate)?;
        validate_tick_size("min_price_tick_size", &self.min_price_tick_size)?;
        validate_tick_size("min_quantity_tick_size", &self.min_quantity_tick_size)?;
        validate_abstract(&self.title, &self.description, params)
    }
}
