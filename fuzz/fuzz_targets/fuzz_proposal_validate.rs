#![no_main]

use dexgov_governance::{ProposalRegistry, ValidationParams};
use libfuzzer_sys::fuzz_target;

// First byte picks a registered type tag, the rest is parsed as a JSON payload.
// Decoding and validation must never panic.
fuzz_target!(|data: &[u8]| {
    let Some((&selector, rest)) = data.split_first() else {
        return;
    };
    let registry = ProposalRegistry::with_exchange_proposals(ValidationParams::default());
    let tags = registry.type_tags();
    let tag = tags[selector as usize % tags.len()];

    let Ok(payload) = serde_json::from_slice::<serde_json::Value>(rest) else {
        return;
    };
    if let Ok(content) = registry.validate(tag, &payload) {
        assert_eq!(content.type_tag(), tag);
        assert!(registry.validate_content(&content).is_ok());
    }
});
