#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }
    let total = u64::from(u16::from_be_bytes([data[0], data[1]]));
    let workers = usize::from(data[2]);
    let lengths = servebench::fuzzing::partition_lengths(total, workers);
    if workers == 0 {
        debug_assert!(lengths.is_empty());
        return;
    }
    debug_assert_eq!(lengths.len(), workers);
    debug_assert_eq!(lengths.iter().sum::<u64>(), total);
    let min = lengths.iter().min().copied().unwrap_or(0);
    let max = lengths.iter().max().copied().unwrap_or(0);
    debug_assert!(max - min <= 1);
});
