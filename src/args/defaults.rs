pub(crate) const DEFAULT_USER_AGENT: &str = concat!("servebench/", env!("CARGO_PKG_VERSION"));

/// Config filenames checked in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILES: [&str; 2] = ["servebench.toml", "servebench.json"];

/// Upper bound for candidates per rerank request.
pub const MAX_CANDIDATES_PER_REQUEST: usize = 4096;

/// Worker pool sizes accepted on the command line.
pub const CONCURRENCY_LEVELS: [usize; 7] = [1, 2, 4, 8, 16, 32, 64];

pub(crate) const DEFAULT_DATASET: &str = "token_len_500.json";
pub(crate) const DEFAULT_MAX_NEW_TOKENS: &str = "128";
