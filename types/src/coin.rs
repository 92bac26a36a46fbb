//! Coins and denominations.

use crate::decimal::{Int, Signed};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Native staking/fee denomination of the chain.
pub const NATIVE_DENOM: &str = "ugtb";

/// One display unit of the native coin is `10^BASE_DENOM_UNIT` base units.
pub const BASE_DENOM_UNIT: u32 = 6;

/// A denomination plus an integer amount.
///
/// `amount` is `None` when the submitter left it unset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
    pub denom: String,
    #[serde(default)]
    pub amount: Option<Int>,
}

impl Coin {
    pub fn new(denom: impl Into<String>, amount: Int) -> Self {
        Self {
            denom: denom.into(),
            amount: Some(amount),
        }
    }

    /// A coin in the native denomination.
    pub fn native(amount: Int) -> Self {
        Self::new(NATIVE_DENOM, amount)
    }

    /// Valid denom and a present, non-negative amount.
    pub fn is_valid(&self) -> bool {
        is_valid_denom(&self.denom) && self.amount.is_some_and(|a| !a.is_negative_value())
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.amount {
            Some(a) => write!(f, "{}{}", a, self.denom),
            None => write!(f, "<nil>{}", self.denom),
        }
    }
}

/// Denoms match `[a-zA-Z][a-zA-Z0-9/:._-]{2,127}`.
pub fn is_valid_denom(denom: &str) -> bool {
    let bytes = denom.as_bytes();
    if !(3..=128).contains(&bytes.len()) || !bytes[0].is_ascii_alphabetic() {
        return false;
    }
    bytes[1..]
        .iter()
        .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'/' | b':' | b'.' | b'_' | b'-'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn denom_rules() {
        assert!(is_valid_denom("usdt"));
        assert!(is_valid_denom("ibc/27394FB092D2ECCD56123C74F36E4C1F926001CEADA9CA97EA622B25F41E5EB2"));
        assert!(is_valid_denom("peggy0xdAC17F958D2ee523a2206206994597C13D831ec7"));
        assert!(!is_valid_denom("ab"));
        assert!(!is_valid_denom("1abc"));
        assert!(!is_valid_denom("ab c"));
        assert!(!is_valid_denom(&"a".repeat(129)));
    }

    #[test]
    fn coin_validity() {
        assert!(Coin::new("usdt", 0).is_valid());
        assert!(Coin::native(5).is_valid());
        assert!(!Coin::new("usdt", -1).is_valid());
        assert!(!Coin { denom: "usdt".into(), amount: None }.is_valid());
        assert!(!Coin::new("u", 1).is_valid());
    }

    #[test]
    fn display() {
        assert_eq!(Coin::new("usdt", 10).to_string(), "10usdt");
    }
}
