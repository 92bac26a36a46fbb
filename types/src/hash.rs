//! Market identifiers: 32-byte hashes rendered as `0x` + 64 lowercase hex chars.

use crate::error::TypesError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Length of the canonical string form: `0x` prefix plus 64 hex characters.
pub const HEX_HASH_LEN: usize = 2 + 64;

/// Whether `s` is a canonical market identifier.
///
/// Only lowercase hex digits are accepted after the `0x` prefix.
pub fn is_hex_hash(s: &str) -> bool {
    s.len() == HEX_HASH_LEN
        && s.starts_with("0x")
        && s.bytes()
            .skip(2)
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
}

/// A market identifier, derived from a 32-byte hash.
///
/// Proposal payloads carry identifiers as plain strings so that malformed
/// values can be represented and rejected; this type is the parsed form.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MarketId([u8; 32]);

impl MarketId {
    pub const ZERO: Self = Self([0u8; 32]);

    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }

    /// Canonical `0x`-prefixed lowercase form.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl FromStr for MarketId {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !is_hex_hash(s) {
            return Err(TypesError::InvalidMarketId(s.to_string()));
        }
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(&s[2..], &mut bytes)
            .map_err(|_| TypesError::InvalidMarketId(s.to_string()))?;
        Ok(Self(bytes))
    }
}

impl fmt::Debug for MarketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MarketId(0x{})", hex::encode(&self.0[..4]))
    }
}

impl fmt::Display for MarketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_form_is_accepted() {
        let id = MarketId::new([0xab; 32]);
        let s = id.to_hex();
        assert_eq!(s.len(), HEX_HASH_LEN);
        assert!(is_hex_hash(&s));
        assert_eq!(s.parse::<MarketId>().unwrap(), id);
    }

    #[test]
    fn uppercase_is_rejected() {
        let s = format!("0x{}", "AB".repeat(32));
        assert!(!is_hex_hash(&s));
        assert!(s.parse::<MarketId>().is_err());
    }

    #[test]
    fn missing_prefix_is_rejected() {
        assert!(!is_hex_hash(&"ab".repeat(33)));
        assert!(!is_hex_hash(&format!("0X{}", "ab".repeat(32))));
    }

    #[test]
    fn wrong_length_is_rejected() {
        assert!(!is_hex_hash(""));
        assert!(!is_hex_hash("0x"));
        assert!(!is_hex_hash(&format!("0x{}", "a".repeat(63))));
        assert!(!is_hex_hash(&format!("0x{}", "a".repeat(65))));
    }

    #[test]
    fn non_hex_is_rejected() {
        assert!(!is_hex_hash(&format!("0x{}g", "a".repeat(63))));
    }

    #[test]
    fn debug_is_abbreviated() {
        let id = MarketId::new([0x11; 32]);
        assert_eq!(format!("{:?}", id), "MarketId(0x11111111)");
    }
}
