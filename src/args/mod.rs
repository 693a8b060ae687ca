//! CLI argument types and parsing helpers.
mod cli;
mod defaults;
pub(crate) mod parsers;
mod types;

#[cfg(test)]
mod test_support;
#[cfg(test)]
mod tests;

pub use cli::BenchArgs;
pub use defaults::{CONCURRENCY_LEVELS, DEFAULT_CONFIG_FILES, MAX_CANDIDATES_PER_REQUEST};
pub use types::{OutputFormat, PositiveU64, PositiveUsize, TaskKind};

pub(crate) use defaults::DEFAULT_USER_AGENT;
pub(crate) use parsers::{ensure_candidates, ensure_concurrency, parse_duration_arg};
