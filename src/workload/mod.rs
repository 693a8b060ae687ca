//! Task-specific request payloads.
mod builder;
mod task;


pub use builder::{RequestBuilder, build};
pub use task::RequestTask;

pub use crate::args::TaskKind;
