#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        if let Ok(items) = servebench::fuzzing::parse_dataset_input(input) {
            if let Ok(pool) = servebench::dataset::TextPool::new(items) {
                let len = u64::try_from(pool.len()).unwrap_or(u64::MAX);
                debug_assert_eq!(pool.sample(0), pool.sample(len));
                debug_assert_eq!(pool.window(1, 3).len(), 3);
            }
        }
    }
});
