#![no_main]

use dexgov_types::{decode_bech32, encode_bech32, is_hex_hash, AccAddress, MarketId};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };

    if let Some((hrp, bytes)) = decode_bech32(s) {
        // Anything that decodes must re-encode to its lowercase form.
        assert_eq!(encode_bech32(&hrp, &bytes), s.to_ascii_lowercase());
    }
    let _ = AccAddress::from_bech32(s, "gtb");

    let parsed = s.parse::<MarketId>();
    assert_eq!(parsed.is_ok(), is_hex_hash(s));
    if let Ok(id) = parsed {
        assert_eq!(id.to_hex(), s);
    }
});
