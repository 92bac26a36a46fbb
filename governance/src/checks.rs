//! Primitive and relational checks shared by every proposal validator.
//!
//! Each check returns the first violation; none of them hold state.

use crate::error::ValidationError;
use crate::params::{ValidationParams, MAX_FEE_RATE, MIN_MAKER_FEE_RATE};
use dexgov_types::{is_hex_hash, validate_address, Coin, Decimal};
use std::collections::HashSet;
use std::hash::Hash;

/// Fee rate in `[0, 1]`.
pub fn validate_fee(field: &'static str, v: &Decimal) -> Result<(), ValidationError> {
    if *v < Decimal::ZERO {
        return Err(ValidationError::range(field, format!("fee {v} cannot be negative")));
    }
    if *v > MAX_FEE_RATE {
        return Err(ValidationError::range(field, format!("fee {v} cannot be greater than 1")));
    }
    Ok(())
}

/// Maker fee rate in `[-1, 1]`; negative values are rebates.
pub fn validate_maker_fee(v: &Decimal) -> Result<(), ValidationError> {
    if *v > MAX_FEE_RATE {
        return Err(ValidationError::range(
            "maker_fee_rate",
            format!("fee {v} cannot be greater than 1"),
        ));
    }
    if *v < MIN_MAKER_FEE_RATE {
        return Err(ValidationError::range(
            "maker_fee_rate",
            format!("fee {v} cannot be less than -1"),
        ));
    }
    Ok(())
}

/// Tick sizes must be strictly positive.
pub fn validate_tick_size(field: &'static str, v: &Decimal) -> Result<(), ValidationError> {
    if *v <= Decimal::ZERO {
        return Err(ValidationError::range(field, format!("tick size {v} must be positive")));
    }
    Ok(())
}

/// Margin ratio in `(0, 1]`.
pub fn validate_margin_ratio(field: &'static str, v: &Decimal) -> Result<(), ValidationError> {
    if *v <= Decimal::ZERO {
        return Err(ValidationError::range(field, format!("margin ratio {v} must be positive")));
    }
    if *v > Decimal::ONE {
        return Err(ValidationError::range(
            field,
            format!("margin ratio {v} cannot be greater than 1"),
        ));
    }
    Ok(())
}

/// Hourly interest rate in `[0, max_hourly_interest_rate]`.
pub fn validate_hourly_interest_rate(
    v: &Decimal,
    params: &ValidationParams,
) -> Result<(), ValidationError> {
    if *v < Decimal::ZERO {
        return Err(ValidationError::range(
            "hourly_interest_rate",
            format!("{v} cannot be negative"),
        ));
    }
    if *v > params.max_hourly_interest_rate {
        return Err(ValidationError::range(
            "hourly_interest_rate",
            format!("{v} cannot be larger than {}", params.max_hourly_interest_rate),
        ));
    }
    Ok(())
}

/// Hourly funding rate cap in `(0, max_hourly_funding_rate_cap]`.
pub fn validate_hourly_funding_rate_cap(
    v: &Decimal,
    params: &ValidationParams,
) -> Result<(), ValidationError> {
    if *v <= Decimal::ZERO {
        return Err(ValidationError::range(
            "hourly_funding_rate_cap",
            format!("{v} must be positive"),
        ));
    }
    if *v > params.max_hourly_funding_rate_cap {
        return Err(ValidationError::range(
            "hourly_funding_rate_cap",
            format!("{v} cannot be larger than {}", params.max_hourly_funding_rate_cap),
        ));
    }
    Ok(())
}

/// Maker fee may not exceed taker fee.
pub fn validate_fee_relation(maker: &Decimal, taker: &Decimal) -> Result<(), ValidationError> {
    if maker > taker {
        return Err(ValidationError::relation(
            "maker fee must not exceed taker fee",
            format!("maker {maker} > taker {taker}"),
        ));
    }
    Ok(())
}

/// Initial margin may not be below maintenance margin.
pub fn validate_margin_relation(
    initial: &Decimal,
    maintenance: &Decimal,
) -> Result<(), ValidationError> {
    if initial < maintenance {
        return Err(ValidationError::relation(
            "initial margin ratio must not be below maintenance margin ratio",
            format!("initial {initial} < maintenance {maintenance}"),
        ));
    }
    Ok(())
}

/// Expiration strictly before settlement, both non-negative.
pub fn validate_expiry_relation(expiration: i64, settlement: i64) -> Result<(), ValidationError> {
    if expiration < 0 || settlement < 0 {
        return Err(ValidationError::range(
            "expiration_timestamp",
            format!("timestamps cannot be negative: expiration {expiration}, settlement {settlement}"),
        ));
    }
    if expiration >= settlement {
        return Err(ValidationError::relation(
            "expiration must be before settlement",
            format!("expiration {expiration} >= settlement {settlement}"),
        ));
    }
    Ok(())
}

/// Market identifiers must be `0x` + 64 lowercase hex characters.
pub fn validate_market_id(field: &'static str, id: &str) -> Result<(), ValidationError> {
    if !is_hex_hash(id) {
        return Err(ValidationError::format(field, format!("{id} is not a market id")));
    }
    Ok(())
}

/// Every id in `ids` is well-formed and none repeats.
pub fn validate_market_ids(field: &'static str, ids: &[String]) -> Result<(), ValidationError> {
    for id in ids {
        validate_market_id(field, id)?;
    }
    if let Some(dup) = find_duplicate(ids) {
        return Err(ValidationError::duplicate(field, dup));
    }
    Ok(())
}

/// Ticker non-empty and no longer than the configured maximum.
pub fn validate_ticker(ticker: &str, params: &ValidationParams) -> Result<(), ValidationError> {
    if ticker.is_empty() || ticker.len() > params.max_ticker_length {
        return Err(ValidationError::format(
            "ticker",
            format!(
                "ticker should not be empty or exceed {} characters",
                params.max_ticker_length
            ),
        ));
    }
    Ok(())
}

pub fn validate_denom(field: &'static str, denom: &str) -> Result<(), ValidationError> {
    if denom.is_empty() {
        return Err(ValidationError::format(field, "denom should not be empty"));
    }
    Ok(())
}

pub fn validate_account_address(
    field: &'static str,
    address: &str,
    params: &ValidationParams,
) -> Result<(), ValidationError> {
    if !validate_address(address, &params.account_address_prefix) {
        return Err(ValidationError::format(
            field,
            format!(
                "{address} is not a valid {} address",
                params.account_address_prefix
            ),
        ));
    }
    Ok(())
}

/// First element that occurs more than once.
pub fn find_duplicate<T: Eq + Hash>(items: &[T]) -> Option<&T> {
    let mut seen = HashSet::with_capacity(items.len());
    items.iter().find(|item| !seen.insert(*item))
}

pub fn has_duplicates<T: Eq + Hash>(items: &[T]) -> bool {
    find_duplicate(items).is_some()
}

/// First denomination that occurs more than once among `coins`.
pub fn find_duplicate_denom(coins: &[Coin]) -> Option<&str> {
    let mut seen = HashSet::with_capacity(coins.len());
    coins
        .iter()
        .map(|c| c.denom.as_str())
        .find(|denom| !seen.insert(*denom))
}

/// Title and description non-blank and within their length bounds.
pub fn validate_abstract(
    title: &str,
    description: &str,
    params: &ValidationParams,
) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::format("title", "proposal title cannot be blank"));
    }
    if title.len() > params.max_title_length {
        return Err(ValidationError::range(
            "title",
            format!("proposal title is longer than max length of {}", params.max_title_length),
        ));
    }
    if description.trim().is_empty() {
        return Err(ValidationError::format(
            "description",
            "proposal description cannot be blank",
        ));
    }
    if description.len() > params.max_description_length {
        return Err(ValidationError::range(
            "description",
            format!(
                "proposal description is longer than max length of {}",
                params.max_description_length
            ),
        ));
    }
    Ok(())
}
