#![no_main]

use libfuzzer_sys::fuzz_target;
use servebench::config::types::ConfigFile;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let parsed: Option<ConfigFile> = toml::from_str(input).ok();
        let applied = servebench::fuzzing::apply_config_from_toml(input);
        if applied.is_ok() {
            if let Some(config) = parsed {
                debug_assert!(config.total_requests.map_or(true, |value| value > 0));
                debug_assert!(config.concurrency.map_or(true, |value| {
                    servebench::args::CONCURRENCY_LEVELS.contains(&value)
                }));
            }
        }
    }
});
