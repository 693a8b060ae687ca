#![no_main]

use clap::Parser;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let mut args = vec!["servebench".to_owned()];
        for token in input.split_whitespace().take(64) {
            args.push(token.to_owned());
        }
        if let Ok(parsed) = servebench::args::BenchArgs::try_parse_from(&args) {
            debug_assert!(parsed.total_requests.get() >= 1);
            debug_assert!(
                servebench::args::CONCURRENCY_LEVELS.contains(&parsed.concurrency.get())
            );
        }
    }
});
