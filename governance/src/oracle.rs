//! Oracle source descriptors.

use crate::error::ValidationError;
use crate::params::ValidationParams;
use dexgov_types::OracleType;
use serde::{Deserialize, Serialize};

/// A base/quote price feed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OracleParams {
    pub oracle_base: String,
    pub oracle_quote: String,
    #[serde(default)]
    pub oracle_scale_factor: u32,
    pub oracle_type: OracleType,
}

impl OracleParams {
    pub fn new(
        oracle_base: impl Into<String>,
        oracle_quote: impl Into<String>,
        oracle_scale_factor: u32,
        oracle_type: OracleType,
    ) -> Self {
        Self {
            oracle_base: oracle_base.into(),
            oracle_quote: oracle_quote.into(),
            oracle_scale_factor,
            oracle_type,
        }
    }

    pub fn validate(&self, params: &ValidationParams) -> Result<(), ValidationError> {
        if self.oracle_base.is_empty() {
            return Err(ValidationError::format("oracle_base", "oracle base should not be empty"));
        }
        if self.oracle_quote.is_empty() {
            return Err(ValidationError::format(
                "oracle_quote",
                "oracle quote should not be empty",
            ));
        }
        if self.oracle_base == self.oracle_quote {
            return Err(ValidationError::relation(
                "oracle base and quote must differ",
                format!("both are {}", self.oracle_base),
            ));
        }
        match self.oracle_type {
            OracleType::Band
            | OracleType::PriceFeed
            | OracleType::Coinbase
            | OracleType::Chainlink
            | OracleType::Razor
            | OracleType::Dia
            | OracleType::Api3
            | OracleType::Uma
            | OracleType::Pyth
            | OracleType::BandIbc
            | OracleType::Provider => {}
            other => return Err(ValidationError::enumeration("oracle_type", other)),
        }
        validate_scale_factor(self.oracle_scale_factor, params)
    }
}

/// A provider-pushed price feed, identified by symbol.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderOracleParams {
    pub symbol: String,
    pub provider: String,
    #[serde(default)]
    pub oracle_scale_factor: u32,
    pub oracle_type: OracleType,
}

impl ProviderOracleParams {
    pub fn new(
        symbol: impl Into<String>,
        provider: impl Into<String>,
        oracle_scale_factor: u32,
        oracle_type: OracleType,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            provider: provider.into(),
            oracle_scale_factor,
            oracle_type,
        }
    }

    pub fn validate(&self, params: &ValidationParams) -> Result<(), ValidationError> {
        validate_provider_oracle(
            &self.symbol,
            &self.provider,
            self.oracle_type,
            self.oracle_scale_factor,
            params,
        )
    }
}

/// Shared by [`ProviderOracleParams`] and the binary-options launch, which
/// carries the same fields inline.
pub(crate) fn validate_provider_oracle(
    symbol: &str,
    provider: &str,
    oracle_type: OracleType,
    scale_factor: u32,
    params: &ValidationParams,
) -> Result<(), ValidationError> {
    if symbol.is_empty() {
        return Err(ValidationError::format("oracle_symbol", "oracle symbol should not be empty"));
    }
    if provider.is_empty() {
        return Err(ValidationError::format(
            "oracle_provider",
            "oracle provider should not be empty",
        ));
    }
    if oracle_type != OracleType::Provider {
        return Err(ValidationError::enumeration("oracle_type", oracle_type));
    }
    validate_scale_factor(scale_factor, params)
}

fn validate_scale_factor(scale_factor: u32, params: &ValidationParams) -> Result<(), ValidationError> {
    if scale_factor > params.max_oracle_scale_factor {
        return Err(ValidationError::range(
            "oracle_scale_factor",
            format!(
                "{scale_factor} exceeds max oracle scale factor {}",
                params.max_oracle_scale_factor
            ),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn kind(r: Result<(), ValidationError>) -> ErrorKind {
        r.unwrap_err().kind()
    }

    #[test]
    fn base_quote_feed() {
        let params = ValidationParams::default();
        assert!(OracleParams::new("BTC", "USDT", 6, OracleType::Band).validate(&params).is_ok());
        assert_eq!(
            kind(OracleParams::new("", "USDT", 6, OracleType::Band).validate(&params)),
            ErrorKind::InvalidFormat
        );
        assert_eq!(
            kind(OracleParams::new("BTC", "BTC", 6, OracleType::Band).validate(&params)),
            ErrorKind::RelationViolation
        );
        assert_eq!(
            kind(OracleParams::new("BTC", "USDT", 6, OracleType::Unspecified).validate(&params)),
            ErrorKind::InvalidEnumeration
        );
        assert_eq!(
            kind(OracleParams::new("BTC", "USDT", 6, OracleType::from(99)).validate(&params)),
            ErrorKind::InvalidEnumeration
        );
        assert_eq!(
            kind(OracleParams::new("BTC", "USDT", 19, OracleType::Pyth).validate(&params)),
            ErrorKind::OutOfRange
        );
    }

    #[test]
    fn provider_feed_requires_provider_type() {
        let params = ValidationParams::default();
        let ok = ProviderOracleParams::new("ELECTION", "frontrunner", 6, OracleType::Provider);
        assert!(ok.validate(&params).is_ok());

        let wrong_type = ProviderOracleParams::new("ELECTION", "frontrunner", 6, OracleType::Band);
        assert_eq!(kind(wrong_type.validate(&params)), ErrorKind::InvalidEnumeration);

        let no_provider = ProviderOracleParams::new("ELECTION", "", 6, OracleType::Provider);
        assert_eq!(kind(no_provider.validate(&params)), ErrorKind::InvalidFormat);

        let too_scaled = ProviderOracleParams::new("ELECTION", "frontrunner", 18, OracleType::Provider);
        assert!(too_scaled.validate(&params).is_ok());
        let too_scaled = ProviderOracleParams::new("ELECTION", "frontrunner", 19, OracleType::Provider);
        assert_eq!(kind(too_scaled.validate(&params)), ErrorKind::OutOfRange);
    }
}
