//! Cyclic sample pools that feed request payloads.
//!
//! A pool of any non-empty size serves an arbitrarily long run: the logical
//! request index is reduced modulo the pool length.
mod loader;
mod pool;


pub use loader::{load_pool, parse_fragments};
pub use pool::{Sampler, TextPool, sample, window};
