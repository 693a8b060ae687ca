#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((&pct, rest)) = data.split_first() else {
        return;
    };
    let nanos: Vec<u64> = rest
        .chunks(4)
        .map(|chunk| chunk.iter().fold(0u64, |acc, byte| (acc << 8) | u64::from(*byte)))
        .collect();
    let value = servebench::fuzzing::percentile_input(&nanos, u64::from(pct));
    if let (Some(min), Some(max)) = (nanos.iter().min(), nanos.iter().max()) {
        debug_assert!(value.as_nanos() >= u128::from(*min));
        debug_assert!(value.as_nanos() <= u128::from(*max));
    }
});
