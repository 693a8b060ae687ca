//! Core library for the `servebench` CLI.
//!
//! A run drives a fixed pool of workers against one inference endpoint.
//! Each worker owns a contiguous block of logical request indices, builds
//! the task payload for every index from cyclic sample pools, and records
//! the timing and outcome of each request. The dispatcher joins all workers
//! and the aggregator reduces the records into a [`metrics::RunReport`].
pub mod args;
pub mod config;
pub mod dataset;
pub mod error;
pub mod http;
pub mod metrics;
pub mod report;
pub mod workload;

#[cfg(feature = "fuzzing")]
pub mod fuzzing;
