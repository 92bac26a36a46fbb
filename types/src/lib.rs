//! Fundamental types for exchange governance proposals.
//!
//! This crate defines the leaf types every proposal validator is built on:
//! the decimal contract, market identifiers, account addresses, coins, and
//! the integer-coded wire enumerations.

pub mod address;
pub mod coin;
pub mod decimal;
pub mod enums;
pub mod error;
pub mod hash;

pub use address::{decode_bech32, encode_bech32, validate_address, AccAddress};
pub use coin::{is_valid_denom, Coin, BASE_DENOM_UNIT, NATIVE_DENOM};
pub use decimal::{is_zero_or_nil, safe_is_non_negative, safe_is_positive, Decimal, Int, Signed};
pub use enums::{ExchangeType, MarketStatus, OracleType};
pub use error::TypesError;
pub use hash::{is_hex_hash, MarketId, HEX_HASH_LEN};
