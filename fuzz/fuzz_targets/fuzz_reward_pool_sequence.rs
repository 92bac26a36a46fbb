#![no_main]

use dexgov_governance::{validate_reward_pool_sequence, CampaignRewardPool};
use dexgov_types::Coin;
use libfuzzer_sys::fuzz_target;

// Arbitrary durations and start timestamps, including overflow-prone values.
fuzz_target!(|data: &[u8]| {
    if data.len() < 8 {
        return;
    }
    let mut words = data
        .chunks_exact(8)
        .map(|c| i64::from_le_bytes([c[0], c[1], c[2], c[3], c[4], c[5], c[6], c[7]]));
    let Some(duration) = words.next() else {
        return;
    };
    let pools: Vec<CampaignRewardPool> = words
        .map(|start| CampaignRewardPool::new(start, vec![Coin::native(1)]))
        .collect();

    if let Ok(last) = validate_reward_pool_sequence(pools.iter().map(Some), duration) {
        assert_eq!(last, pools.last().map_or(0, |p| p.start_timestamp));
    }
});
