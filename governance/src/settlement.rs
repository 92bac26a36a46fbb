//! Forced settlement and denomination decimals.

use crate::checks::{validate_abstract, validate_market_id};
use crate::error::ValidationError;
use crate::params::ValidationParams;
use dexgov_types::Decimal;
use serde::{Deserialize, Serialize};

/// Force a market to settle, optionally at a governance-chosen price.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketForcedSettlementProposal {
    pub title: String,
    pub description: String,
    pub market_id: String,
    /// `None` settles at the oracle price.
    #[serde(default)]
    pub settlement_price: Option<Decimal>,
}

impl MarketForcedSettlementProposal {
    pub fn validate(&self, params: &ValidationParams) -> Result<(), ValidationError> {
        validate_market_id("market_id", &self.market_id)?;
        if let Some(price) = &self.settlement_price {
            if *price <= Decimal::ZERO {
                return Err(ValidationError::range(
                    "settlement_price",
                    format!("{price} must be positive"),
                ));
            }
        }
        validate_abstract(&self.title, &self.description, params)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DenomDecimals {
    pub denom: String,
    pub decimals: u64,
}

impl DenomDecimals {
    pub fn new(denom: impl Into<String>, decimals: u64) -> Self {
        Self {
            denom: denom.into(),
            decimals,
        }
    }

    pub fn validate(&self, params: &ValidationParams) -> Result<(), ValidationError> {
        if self.denom.is_empty() {
            return Err(ValidationError::format("denom", "denom should not be empty"));
        }
        let max = u64::from(params.max_oracle_scale_factor);
        if self.decimals == 0 || self.decimals > max {
            return Err(ValidationError::range(
                "decimals",
                format!("{} decimals for {} not in [1, {max}]", self.decimals, self.denom),
            ));
        }
        Ok(())
    }
}

/// Register the number of decimals for one or more denominations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateDenomDecimalsProposal {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub denom_decimals: Vec<DenomDecimals>,
}

impl UpdateDenomDecimalsProposal {
    pub fn validate(&self, params: &ValidationParams) -> Result<(), ValidationError> {
        for d in &self.denom_decimals {
            d.validate(params)?;
        }
        validate_abstract(&self.title, &self.description, params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use dexgov_types::MarketId;
    use rust_decimal_macros::dec;

    fn settlement(price: Option<Decimal>) -> MarketForcedSettlementProposal {
        MarketForcedSettlementProposal {
            title: "Settle".into(),
            description: "Settle the market".into(),
            market_id: MarketId::new([0x01; 32]).to_hex(),
            settlement_price: price,
        }
    }

    fn decimals(entries: Vec<DenomDecimals>) -> UpdateDenomDecimalsProposal {
        UpdateDenomDecimalsProposal {
            title: "Decimals".into(),
            description: "Register decimals".into(),
            denom_decimals: entries,
        }
    }

    #[test]
    fn settlement_price_optional_but_positive() {
        let params = ValidationParams::default();
        assert!(settlement(None).validate(&params).is_ok());
        assert!(settlement(Some(dec!(42.5))).validate(&params).is_ok());
        for price in [dec!(0), dec!(-1)] {
            let err = settlement(Some(price)).validate(&params).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::OutOfRange);
        }
    }

    #[test]
    fn settlement_market_id_checked_first() {
        let mut p = settlement(Some(dec!(0)));
        p.market_id = "0x1234".into();
        p.title.clear();
        let err = p.validate(&ValidationParams::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidFormat);
        assert!(err.to_string().contains("market_id"));
    }

    #[test]
    fn denom_decimals_bounds() {
        let params = ValidationParams::default();
        assert!(decimals(vec![DenomDecimals::new("peggy0xdac", 6)]).validate(&params).is_ok());
        assert!(decimals(vec![DenomDecimals::new("x", 18)]).validate(&params).is_ok());
        assert!(decimals(vec![]).validate(&params).is_ok());

        for d in [0, 19] {
            let err = decimals(vec![DenomDecimals::new("x", d)]).validate(&params).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::OutOfRange);
        }
        let err = decimals(vec![DenomDecimals::new("", 6)]).validate(&params).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidFormat);
    }
}
