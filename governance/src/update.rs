//! Partial-update proposals for existing markets, plus exchange enablement.
//!
//! Every optional field is `None` when the submitter wants it left unchanged.
//! At least one field must be set; set fields are checked individually, and
//! paired fields are checked against each other when both are set.

use crate::checks::{
    validate_abstract, validate_account_address, validate_expiry_relation, validate_fee,
    validate_fee_relation, validate_hourly_funding_rate_cap, validate_hourly_interest_rate,
    validate_maker_fee, validate_margin_ratio, validate_margin_relation, validate_market_id,
    validate_tick_size,
};
use crate::error::ValidationError;
use crate::oracle::{OracleParams, ProviderOracleParams};
use crate::params::{ValidationParams, BINARY_OPTIONS_REFUND_FLAG_PRICE, MAX_BINARY_OPTIONS_PRICE};
use dexgov_types::{Decimal, ExchangeType, MarketStatus};
use serde::{Deserialize, Serialize};

/// Switch on trading for a whole exchange.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeEnableProposal {
    pub title: String,
    pub description: String,
    pub exchange_type: ExchangeType,
}

impl ExchangeEnableProposal {
    pub fn validate(&self, params: &ValidationParams) -> Result<(), ValidationError> {
        match self.exchange_type {
            ExchangeType::Spot | ExchangeType::Derivatives => {}
            other => return Err(ValidationError::enumeration("exchange_type", other)),
        }
        validate_abstract(&self.title, &self.description, params)
    }
}

/// Update the parameters of a spot market.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpotMarketParamUpdateProposal {
    pub title: String,
    pub description: String,
    pub market_id: String,
    #[serde(default)]
    pub maker_fee_rate: Option<Decimal>,
    #[serde(default)]
    pub taker_fee_rate: Option<Decimal>,
    #[serde(default)]
    pub relayer_fee_share_rate: Option<Decimal>,
    #[serde(default)]
    pub min_price_tick_size: Option<Decimal>,
    #[serde(default)]
    pub min_quantity_tick_size: Option<Decimal>,
    #[serde(default)]
    pub status: MarketStatus,
}

impl SpotMarketParamUpdateProposal {
    pub fn validate(&self, params: &ValidationParams) -> Result<(), ValidationError> {
        validate_market_id("market_id", &self.market_id)?;
        if self.maker_fee_rate.is_none()
            && self.taker_fee_rate.is_none()
            && self.relayer_fee_share_rate.is_none()
            && self.min_price_tick_size.is_none()
            && self.min_quantity_tick_size.is_none()
            && self.status == MarketStatus::Unspecified
        {
            return Err(ValidationError::AllFieldsAbsent {
                proposal: "SpotMarketParamUpdateProposal",
            });
        }

        validate_fee_updates(
            self.maker_fee_rate.as_ref(),
            self.taker_fee_rate.as_ref(),
            self.relayer_fee_share_rate.as_ref(),
        )?;
        validate_tick_updates(
            self.min_price_tick_size.as_ref(),
            self.min_quantity_tick_size.as_ref(),
        )?;
        validate_market_status(self.status)?;

        validate_abstract(&self.title, &self.description, params)
    }
}

/// Update the parameters of a perpetual or expiry futures market.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DerivativeMarketParamUpdateProposal {
    pub title: String,
    pub description: String,
    pub market_id: String,
    #[serde(default)]
    pub initial_margin_ratio: Option<Decimal>,
    #[serde(default)]
    pub maintenance_margin_ratio: Option<Decimal>,
    #[serde(default)]
    pub maker_fee_rate: Option<Decimal>,
    #[serde(default)]
    pub taker_fee_rate: Option<Decimal>,
    #[serde(default)]
    pub relayer_fee_share_rate: Option<Decimal>,
    #[serde(default)]
    pub min_price_tick_size: Option<Decimal>,
    #[serde(default)]
    pub min_quantity_tick_size: Option<Decimal>,
    #[serde(default)]
    pub hourly_interest_rate: Option<Decimal>,
    #[serde(default)]
    pub hourly_funding_rate_cap: Option<Decimal>,
    #[serde(default)]
    pub status: MarketStatus,
    #[serde(default)]
    pub oracle_params: Option<OracleParams>,
}

impl DerivativeMarketParamUpdateProposal {
    pub fn validate(&self, params: &ValidationParams) -> Result<(), ValidationError> {
        validate_market_id("market_id", &self.market_id)?;
        if self.maker_fee_rate.is_none()
            && self.taker_fee_rate.is_none()
            && self.relayer_fee_share_rate.is_none()
            && self.min_price_tick_size.is_none()
            && self.min_quantity_tick_size.is_none()
            && self.initial_margin_ratio.is_none()
            && self.maintenance_margin_ratio.is_none()
            && self.hourly_interest_rate.is_none()
            && self.hourly_funding_rate_cap.is_none()
            && self.status == MarketStatus::Unspecified
            && self.oracle_params.is_none()
        {
            return Err(ValidationError::AllFieldsAbsent {
                proposal: "DerivativeMarketParamUpdateProposal",
            });
        }

        validate_fee_updates(
            self.maker_fee_rate.as_ref(),
            self.taker_fee_rate.as_ref(),
            self.relayer_fee_share_rate.as_ref(),
        )?;

        if let Some(v) = &self.initial_margin_ratio {
            validate_margin_ratio("initial_margin_ratio", v)?;
        }
        if let Some(v) = &self.maintenance_margin_ratio {
            validate_margin_ratio("maintenance_margin_ratio", v)?;
        }
        if let (Some(initial), Some(maintenance)) =
            (&self.initial_margin_ratio, &self.maintenance_margin_ratio)
        {
            validate_margin_relation(initial, maintenance)?;
        }

        validate_tick_updates(
            self.min_price_tick_size.as_ref(),
            self.min_quantity_tick_size.as_ref(),
        )?;

        if let Some(v) = &self.hourly_interest_rate {
            validate_hourly_interest_rate(v, params)?;
        }
        if let Some(v) = &self.hourly_funding_rate_cap {
            validate_hourly_funding_rate_cap(v, params)?;
        }

        validate_market_status(self.status)?;

        if let Some(oracle) = &self.oracle_params {
            oracle.validate(params)?;
        }

        validate_abstract(&self.title, &self.description, params)
    }
}

/// Update a binary-options market, or demolish it with a settlement price.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BinaryOptionsMarketParamUpdateProposal {
    pub title: String,
    pub description: String,
    pub market_id: String,
    #[serde(default)]
    pub maker_fee_rate: Option<Decimal>,
    #[serde(default)]
    pub taker_fee_rate: Option<Decimal>,
    #[serde(default)]
    pub relayer_fee_share_rate: Option<Decimal>,
    #[serde(default)]
    pub min_price_tick_size: Option<Decimal>,
    #[serde(default)]
    pub min_quantity_tick_size: Option<Decimal>,
    /// `0` leaves the timestamp unchanged.
    #[serde(default)]
    pub expiration_timestamp: i64,
    /// `0` leaves the timestamp unchanged.
    #[serde(default)]
    pub settlement_timestamp: i64,
    /// `None`: unchanged. `-1`: demolish with refunds. `[0, 1]`: demolish and settle.
    #[serde(default)]
    pub settlement_price: Option<Decimal>,
    /// Empty leaves the admin unchanged.
    #[serde(default)]
    pub admin: String,
    #[serde(default)]
    pub status: MarketStatus,
    #[serde(default)]
    pub oracle_params: Option<ProviderOracleParams>,
}

impl BinaryOptionsMarketParamUpdateProposal {
    pub fn validate(&self, params: &ValidationParams) -> Result<(), ValidationError> {
        validate_market_id("market_id", &self.market_id)?;
        if self.maker_fee_rate.is_none()
            && self.taker_fee_rate.is_none()
            && self.relayer_fee_share_rate.is_none()
            && self.min_price_tick_size.is_none()
            && self.min_quantity_tick_size.is_none()
            && self.status == MarketStatus::Unspecified
            && self.expiration_timestamp == 0
            && self.settlement_timestamp == 0
            && self.settlement_price.is_none()
            && self.admin.is_empty()
            && self.oracle_params.is_none()
        {
            return Err(ValidationError::AllFieldsAbsent {
                proposal: "BinaryOptionsMarketParamUpdateProposal",
            });
        }

        validate_fee_updates(
            self.maker_fee_rate.as_ref(),
            self.taker_fee_rate.as_ref(),
            self.relayer_fee_share_rate.as_ref(),
        )?;
        validate_tick_updates(
            self.min_price_tick_size.as_ref(),
            self.min_quantity_tick_size.as_ref(),
        )?;

        if self.expiration_timestamp != 0 && self.settlement_timestamp != 0 {
            validate_expiry_relation(self.expiration_timestamp, self.settlement_timestamp)?;
        }
        if self.expiration_timestamp < 0 {
            return Err(ValidationError::range(
                "expiration_timestamp",
                format!("{} cannot be negative", self.expiration_timestamp),
            ));
        }
        if self.settlement_timestamp < 0 {
            return Err(ValidationError::range(
                "settlement_timestamp",
                format!("{} cannot be negative", self.settlement_timestamp),
            ));
        }

        if !self.admin.is_empty() {
            validate_account_address("admin", &self.admin, params)?;
        }

        self.validate_settlement_price()?;

        match self.status {
            MarketStatus::Unspecified | MarketStatus::Demolished => {}
            other => return Err(ValidationError::enumeration("status", other)),
        }

        if let Some(oracle) = &self.oracle_params {
            oracle.validate(params)?;
        }

        validate_abstract(&self.title, &self.description, params)
    }

    /// Absent is fine; the refund flag or a price in `[0, max]` requires the
    /// market to be demolished in the same proposal; anything else is invalid.
    fn validate_settlement_price(&self) -> Result<(), ValidationError> {
        let Some(price) = &self.settlement_price else {
            return Ok(());
        };
        let is_refund = *price == BINARY_OPTIONS_REFUND_FLAG_PRICE;
        let is_settle = *price >= Decimal::ZERO && *price <= MAX_BINARY_OPTIONS_PRICE;
        if !(is_refund || is_settle) {
            return Err(ValidationError::range(
                "settlement_price",
                format!(
                    "{price} is neither the refund flag {BINARY_OPTIONS_REFUND_FLAG_PRICE} nor within [0, {MAX_BINARY_OPTIONS_PRICE}]"
                ),
            ));
        }
        if self.status != MarketStatus::Demolished {
            return Err(ValidationError::InvalidEnumeration {
                field: "status",
                value: format!(
                    "{} (status should be set to Demolished when the settlement price is set)",
                    self.status
                ),
            });
        }
        Ok(())
    }
}

fn validate_fee_updates(
    maker: Option<&Decimal>,
    taker: Option<&Decimal>,
    relayer_share: Option<&Decimal>,
) -> Result<(), ValidationError> {
    if let Some(v) = maker {
        validate_maker_fee(v)?;
    }
    if let Some(v) = taker {
        validate_fee("taker_fee_rate", v)?;
    }
    if let Some(v) = relayer_share {
        validate_fee("relayer_fee_share_rate", v)?;
    }
    if let (Some(maker), Some(taker)) = (maker, taker) {
        validate_fee_relation(maker, taker)?;
    }
    Ok(())
}

fn validate_tick_updates(
    price_tick: Option<&Decimal>,
    quantity_tick: Option<&Decimal>,
) -> Result<(), ValidationError> {
    if let Some(v) = price_tick {
        validate_tick_size("min_price_tick_size", v)?;
    }
    if let Some(v) = quantity_tick {
        validate_tick_size("min_quantity_tick_size", v)?;
    }
    Ok(())
}

fn validate_market_status(status: MarketStatus) -> Result<(), ValidationError> {
    match status {
        MarketStatus::Unspecified
        | MarketStatus::Active
        | MarketStatus::Paused
        | MarketStatus::Demolished
        | MarketStatus::Expired => Ok(()),
        other => Err(ValidationError::enumeration("status", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use dexgov_types::{MarketId, OracleType};
    use rust_decimal_macros::dec;

    fn market_id() -> String {
        MarketId::new([0x5a; 32]).to_hex()
    }

    fn spot_update() -> SpotMarketParamUpdateProposal {
        SpotMarketParamUpdateProposal {
            title: "Update BTC/USDT".into(),
            description: "Lower the price tick".into(),
            market_id: market_id(),
            maker_fee_rate: None,
            taker_fee_rate: None,
            relayer_fee_share_rate: None,
            min_price_tick_size: None,
            min_quantity_tick_size: None,
            status: MarketStatus::Unspecified,
        }
    }

    fn derivative_update() -> DerivativeMarketParamUpdateProposal {
        DerivativeMarketParamUpdateProposal {
            title: "Update BTC PERP".into(),
            description: "Tighten margins".into(),
            market_id: market_id(),
            initial_margin_ratio: None,
            maintenance_margin_ratio: None,
            maker_fee_rate: None,
            taker_fee_rate: None,
            relayer_fee_share_rate: None,
            min_price_tick_size: None,
            min_quantity_tick_size: None,
            hourly_interest_rate: None,
            hourly_funding_rate_cap: None,
            status: MarketStatus::Unspecified,
            oracle_params: None,
        }
    }

    fn binary_update() -> BinaryOptionsMarketParamUpdateProposal {
        BinaryOptionsMarketParamUpdateProposal {
            title: "Update election market".into(),
            description: "Adjust timestamps".into(),
            market_id: market_id(),
            maker_fee_rate: None,
            taker_fee_rate: None,
            relayer_fee_share_rate: None,
            min_price_tick_size: None,
            min_quantity_tick_size: None,
            expiration_timestamp: 0,
            settlement_timestamp: 0,
            settlement_price: None,
            admin: String::new(),
            status: MarketStatus::Unspecified,
            oracle_params: None,
        }
    }

    fn kind(r: Result<(), ValidationError>) -> ErrorKind {
        r.unwrap_err().kind()
    }

    #[test]
    fn exchange_enable() {
        let params = ValidationParams::default();
        let mut p = ExchangeEnableProposal {
            title: "Enable spot".into(),
            description: "Turn on spot trading".into(),
            exchange_type: ExchangeType::Spot,
        };
        assert!(p.validate(&params).is_ok());
        p.exchange_type = ExchangeType::Unspecified;
        assert_eq!(kind(p.validate(&params)), ErrorKind::InvalidEnumeration);
        p.exchange_type = ExchangeType::from(7);
        assert_eq!(kind(p.validate(&params)), ErrorKind::InvalidEnumeration);
    }

    #[test]
    fn spot_update_with_nothing_set_is_rejected() {
        let err = spot_update().validate(&ValidationParams::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AllFieldsAbsent);
    }

    #[test]
    fn bad_market_id_reported_before_anything_else() {
        let mut p = spot_update();
        p.market_id = market_id().to_uppercase();
        assert_eq!(kind(p.validate(&ValidationParams::default())), ErrorKind::InvalidFormat);
    }

    #[test]
    fn explicit_zero_is_a_set_value() {
        let params = ValidationParams::default();
        let mut p = spot_update();
        p.maker_fee_rate = Some(dec!(0));
        assert!(p.validate(&params).is_ok());

        let mut p = spot_update();
        p.min_price_tick_size = Some(dec!(0));
        assert_eq!(kind(p.validate(&params)), ErrorKind::OutOfRange);
    }

    #[test]
    fn status_only_update_is_accepted() {
        let mut p = spot_update();
        p.status = MarketStatus::Paused;
        assert!(p.validate(&ValidationParams::default()).is_ok());
        p.status = MarketStatus::from(5);
        assert_eq!(
            kind(p.validate(&ValidationParams::default())),
            ErrorKind::InvalidEnumeration
        );
    }

    #[test]
    fn spot_update_fee_relation() {
        let mut p = spot_update();
        p.maker_fee_rate = Some(dec!(0.002));
        p.taker_fee_rate = Some(dec!(0.001));
        assert_eq!(
            kind(p.validate(&ValidationParams::default())),
            ErrorKind::RelationViolation
        );
    }

    #[test]
    fn derivative_update_checks() {
        let params = ValidationParams::default();
        assert_eq!(kind(derivative_update().validate(&params)), ErrorKind::AllFieldsAbsent);

        let mut p = derivative_update();
        p.oracle_params = Some(OracleParams::new("BTC", "USDT", 6, OracleType::Pyth));
        assert!(p.validate(&params).is_ok());

        let mut p = derivative_update();
        p.oracle_params = Some(OracleParams::new("BTC", "USDT", 6, OracleType::Unspecified));
        assert_eq!(kind(p.validate(&params)), ErrorKind::InvalidEnumeration);

        let mut p = derivative_update();
        p.initial_margin_ratio = Some(dec!(0.05));
        p.maintenance_margin_ratio = Some(dec!(0.1));
        assert_eq!(kind(p.validate(&params)), ErrorKind::RelationViolation);

        let mut p = derivative_update();
        p.hourly_interest_rate = Some(dec!(0.5));
        assert_eq!(kind(p.validate(&params)), ErrorKind::OutOfRange);

        let mut p = derivative_update();
        p.hourly_funding_rate_cap = Some(dec!(0));
        assert_eq!(kind(p.validate(&params)), ErrorKind::OutOfRange);

        let mut p = derivative_update();
        p.initial_margin_ratio = Some(dec!(0.2));
        assert!(p.validate(&params).is_ok());
    }

    #[test]
    fn binary_update_timestamps() {
        let params = ValidationParams::default();
        assert_eq!(kind(binary_update().validate(&params)), ErrorKind::AllFieldsAbsent);

        let mut p = binary_update();
        p.expiration_timestamp = 200;
        p.settlement_timestamp = 100;
        assert_eq!(kind(p.validate(&params)), ErrorKind::RelationViolation);

        let mut p = binary_update();
        p.settlement_timestamp = -1;
        assert_eq!(kind(p.validate(&params)), ErrorKind::OutOfRange);

        let mut p = binary_update();
        p.expiration_timestamp = 150;
        assert!(p.validate(&params).is_ok());
    }

    #[test]
    fn binary_update_settlement_price() {
        let params = ValidationParams::default();

        let mut p = binary_update();
        p.settlement_price = Some(dec!(-1));
        assert_eq!(kind(p.validate(&params)), ErrorKind::InvalidEnumeration);
        p.status = MarketStatus::Demolished;
        assert!(p.validate(&params).is_ok());

        for price in [dec!(0), dec!(0.5), dec!(1)] {
            let mut p = binary_update();
            p.settlement_price = Some(price);
            p.status = MarketStatus::Demolished;
            assert!(p.validate(&params).is_ok(), "price {price}");
        }

        for price in [dec!(-0.5), dec!(1.01), dec!(-2)] {
            let mut p = binary_update();
            p.settlement_price = Some(price);
            p.status = MarketStatus::Demolished;
            assert_eq!(kind(p.validate(&params)), ErrorKind::OutOfRange, "price {price}");
        }
    }

    #[test]
    fn binary_update_status_restricted() {
        let params = ValidationParams::default();
        let mut p = binary_update();
        p.status = MarketStatus::Paused;
        assert_eq!(kind(p.validate(&params)), ErrorKind::InvalidEnumeration);
        p.status = MarketStatus::Demolished;
        assert!(p.validate(&params).is_ok());
    }

    #[test]
    fn binary_update_oracle_and_admin() {
        let params = ValidationParams::default();
        let mut p = binary_update();
        p.oracle_params = Some(ProviderOracleParams::new("X", "p", 6, OracleType::Band));
        assert_eq!(kind(p.validate(&params)), ErrorKind::InvalidEnumeration);

        let mut p = binary_update();
        p.admin = "cosmos1invalid".into();
        assert_eq!(kind(p.validate(&params)), ErrorKind::InvalidFormat);
    }
}
