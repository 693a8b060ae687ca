use crate::dataset::Sampler;

use super::{RequestTask, TaskKind};

/// Builds the payload for logical request `index`.
///
/// The result depends only on the arguments, so repeated calls yield equal
/// values.
#[must_use]
pub fn build(
    kind: TaskKind,
    index: u64,
    sampler: &Sampler,
    candidates_per_request: usize,
    max_new_tokens: u64,
) -> RequestTask {
    let query = sampler.query(index).to_owned();
    match kind {
        TaskKind::Rerank => RequestTask::Rerank {
            query,
            candidates: sampler.passages(index, candidates_per_request),
        },
        TaskKind::Embedding => RequestTask::Embedding { text: query },
        TaskKind::Llm => RequestTask::Llm {
            query,
            max_new_tokens,
        },
    }
}

/// Payload settings fixed for the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestBuilder {
    kind: TaskKind,
    candidates_per_request: usize,
    max_new_tokens: u64,
}

impl RequestBuilder {
    #[must_use]
    pub const fn new(kind: TaskKind, candidates_per_request: usize, max_new_tokens: u64) -> Self {
        Self {
            kind,
            candidates_per_request,
            max_new_tokens,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> TaskKind {
        self.kind
    }

    #[must_use]
    pub fn build(&self, index: u64, sampler: &Sampler) -> RequestTask {
        build(
            self.kind,
            index,
            sampler,
            self.candidates_per_request,
            self.max_new_tokens,
        )
    }
}
