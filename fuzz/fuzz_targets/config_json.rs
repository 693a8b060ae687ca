#![no_main]

use libfuzzer_sys::fuzz_target;
use servebench::config::types::ConfigFile;

fuzz_target!(|data: &[u8]| {
    let parsed: Option<ConfigFile> = serde_json::from_slice(data).ok();
    let applied = servebench::fuzzing::apply_config_from_json(data);
    if applied.is_ok() {
        if let Some(config) = parsed {
            debug_assert!(config.total_requests.map_or(true, |value| value > 0));
            debug_assert!(config.candidates_per_request.map_or(true, |value| {
                value > 0 && value <= servebench::args::MAX_CANDIDATES_PER_REQUEST
            }));
        }
    }
});
