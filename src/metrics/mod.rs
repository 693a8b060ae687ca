//! Per-request outcome records and their reduction into a run report.
mod aggregate;
mod types;


pub use aggregate::{aggregate, mean, percentile};
pub use types::{Outcome, OutcomeRecord, RequestFailure, RunReport};
