//! Bech32 account addresses.
//!
//! Address format: `<hrp>` + `1` + base32(payload) + base32(checksum, 6 chars)
//!
//! Checksum: BIP-173 polymod over the expanded human-readable part and data.
//! Base32 alphabet: `qpzry9x8gf2tvdw0s3jn54khce6mua7l`.
//! Validators only check that an address is well-formed for the expected
//! prefix; they never resolve it.

use crate::error::TypesError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Bech32 data alphabet.
const CHARSET: &[u8; 32] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";

/// Reverse lookup table: ASCII byte → 5-bit value (0xFF = invalid).
const CHARSET_DECODE: [u8; 128] = {
    let mut table = [0xFFu8; 128];
    let mut i = 0;
    while i < 32 {
        table[CHARSET[i] as usize] = i as u8;
        i += 1;
    }
    table
};

const GENERATOR: [u32; 5] = [0x3b6a_57b2, 0x2650_8e6d, 0x1ea1_19fa, 0x3d42_33dd, 0x2a14_62b3];

/// Number of checksum characters at the end of the data part.
const CHECKSUM_CHARS: usize = 6;
/// Upper bound on the whole string, matching the chain's decoder.
const MAX_ADDRESS_LEN: usize = 1023;
/// Upper bound on the decoded payload.
pub const MAX_ADDRESS_BYTES: usize = 255;

fn polymod(values: impl IntoIterator<Item = u8>) -> u32 {
    let mut chk: u32 = 1;
    for v in values {
        let top = chk >> 25;
        chk = ((chk & 0x01ff_ffff) << 5) ^ v as u32;
        for (i, g) in GENERATOR.iter().enumerate() {
            if (top >> i) & 1 == 1 {
                chk ^= g;
            }
        }
    }
    chk
}

fn hrp_expand(hrp: &str) -> Vec<u8> {
    let bytes = hrp.as_bytes();
    let mut out = Vec::with_capacity(bytes.len() * 2 + 1);
    out.extend(bytes.iter().map(|b| b >> 5));
    out.push(0);
    out.extend(bytes.iter().map(|b| b & 0x1f));
    out
}

/// Regroup bits, e.g. 8-bit bytes into 5-bit groups and back.
fn convert_bits(data: &[u8], from: u32, to: u32, pad: bool) -> Option<Vec<u8>> {
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    let max_v: u32 = (1 << to) - 1;
    let mut out = Vec::with_capacity(data.len() * from as usize / to as usize + 1);
    for &value in data {
        let v = value as u32;
        if v >> from != 0 {
            return None;
        }
        acc = (acc << from) | v;
        bits += from;
        while bits >= to {
            bits -= to;
            out.push(((acc >> bits) & max_v) as u8);
        }
    }
    if pad {
        if bits > 0 {
            out.push(((acc << (to - bits)) & max_v) as u8);
        }
    } else if bits >= from || ((acc << (to - bits)) & max_v) != 0 {
        return None;
    }
    Some(out)
}

/// Split a bech32 string into its human-readable part and payload bytes.
///
/// Returns `None` on mixed case, bad characters, bad checksum or bad padding.
pub fn decode_bech32(s: &str) -> Option<(String, Vec<u8>)> {
    if s.len() > MAX_ADDRESS_LEN || !s.bytes().all(|b| (33..=126).contains(&b)) {
        return None;
    }
    let has_lower = s.bytes().any(|b| b.is_ascii_lowercase());
    let has_upper = s.bytes().any(|b| b.is_ascii_uppercase());
    if has_lower && has_upper {
        return None;
    }
    let lowered = s.to_ascii_lowercase();
    let sep = lowered.rfind('1')?;
    if sep == 0 || sep + 1 + CHECKSUM_CHARS > lowered.len() {
        return None;
    }
    let (hrp, data_part) = (&lowered[..sep], &lowered[sep + 1..]);

    let mut data = Vec::with_capacity(data_part.len());
    for c in data_part.bytes() {
        let v = CHARSET_DECODE[c as usize];
        if v == 0xFF {
            return None;
        }
        data.push(v);
    }

    if polymod(hrp_expand(hrp).into_iter().chain(data.iter().copied())) != 1 {
        return None;
    }

    let payload = &data[..data.len() - CHECKSUM_CHARS];
    let bytes = convert_bits(payload, 5, 8, false)?;
    Some((hrp.to_string(), bytes))
}

/// Encode payload bytes under `hrp`. Used to build well-formed addresses.
pub fn encode_bech32(hrp: &str, bytes: &[u8]) -> String {
    let hrp = hrp.to_ascii_lowercase();
    let mut data = convert_bits(bytes, 8, 5, true).unwrap_or_default();
    let checksum_input = hrp_expand(&hrp)
        .into_iter()
        .chain(data.iter().copied())
        .chain([0u8; CHECKSUM_CHARS]);
    let pm = polymod(checksum_input) ^ 1;
    for i in 0..CHECKSUM_CHARS {
        data.push(((pm >> (5 * (5 - i))) & 0x1f) as u8);
    }
    let mut out = String::with_capacity(hrp.len() + 1 + data.len());
    out.push_str(&hrp);
    out.push('1');
    out.extend(data.iter().map(|&d| CHARSET[d as usize] as char));
    out
}

/// An account address: the raw bytes behind a bech32 string.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccAddress(Vec<u8>);

impl AccAddress {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Parse `s`, requiring the human-readable part to equal `prefix`.
    pub fn from_bech32(s: &str, prefix: &str) -> Result<Self, TypesError> {
        if s.trim().is_empty() {
            return Err(TypesError::InvalidAddress("empty address string".into()));
        }
        let (hrp, bytes) = decode_bech32(s)
            .ok_or_else(|| TypesError::InvalidAddress(format!("{s} is not valid bech32")))?;
        if hrp != prefix {
            return Err(TypesError::InvalidAddress(format!(
                "{s} has prefix {hrp}, expected {prefix}"
            )));
        }
        if bytes.is_empty() || bytes.len() > MAX_ADDRESS_BYTES {
            return Err(TypesError::InvalidAddress(format!(
                "{s} decodes to {} bytes",
                bytes.len()
            )));
        }
        Ok(Self(bytes))
    }

    pub fn to_bech32(&self, prefix: &str) -> String {
        encode_bech32(prefix, &self.0)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for AccAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccAddress({})", hex::encode(&self.0))
    }
}

/// Whether `s` is a well-formed account address under `prefix`.
pub fn validate_address(s: &str, prefix: &str) -> bool {
    AccAddress::from_bech32(s, prefix).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_vector_decodes() {
        // BIP-173 test vector.
        let (hrp, bytes) = decode_bech32("A12UEL5L").unwrap();
        assert_eq!(hrp, "a");
        assert!(bytes.is_empty());
    }

    #[test]
    fn encode_then_parse() {
        let addr = encode_bech32("gtb", &[7u8; 20]);
        assert!(addr.starts_with("gtb1"));
        let parsed = AccAddress::from_bech32(&addr, "gtb").unwrap();
        assert_eq!(parsed.as_bytes(), &[7u8; 20]);
        assert_eq!(parsed.to_bech32("gtb"), addr);
    }

    #[test]
    fn wrong_prefix_rejected() {
        let addr = encode_bech32("cosmos", &[1u8; 20]);
        assert!(!validate_address(&addr, "gtb"));
        assert!(validate_address(&addr, "cosmos"));
    }

    #[test]
    fn corrupted_checksum_rejected() {
        let addr = encode_bech32("gtb", &[3u8; 20]);
        let mut bad = addr.clone();
        let last = bad.pop().unwrap();
        bad.push(if last == 'q' { 'p' } else { 'q' });
        assert!(!validate_address(&bad, "gtb"));
    }

    #[test]
    fn mixed_case_rejected() {
        let addr = encode_bech32("gtb", &[9u8; 20]);
        let mixed = format!("GTB{}", &addr[3..]);
        assert!(decode_bech32(&mixed).is_none());
        assert!(decode_bech32(&addr.to_ascii_uppercase()).is_some());
    }

    #[test]
    fn empty_payload_rejected() {
        let addr = encode_bech32("gtb", &[]);
        assert!(!validate_address(&addr, "gtb"));
        assert!(!validate_address("", "gtb"));
        assert!(!validate_address("   ", "gtb"));
    }

    #[test]
    fn garbage_rejected() {
        assert!(!validate_address("gtb1", "gtb"));
        assert!(!validate_address("not an address", "gtb"));
        assert!(!validate_address("gtb1bbbbbbbbbbbbbbbb", "gtb"));
    }
}
