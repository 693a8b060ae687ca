use serde::Serialize;

use super::TaskKind;

/// JSON body of one request. Serialized without a tag so each variant
/// matches the shape the target service expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RequestTask {
    Rerank {
        query: String,
        #[serde(rename = "texts")]
        candidates: Vec<String>,
    },
    Embedding {
        text: String,
    },
    Llm {
        query: String,
        max_new_tokens: u64,
    },
}

impl RequestTask {
    #[must_use]
    pub const fn kind(&self) -> TaskKind {
        match self {
            RequestTask::Rerank { .. } => TaskKind::Rerank,
            RequestTask::Embedding { .. } => TaskKind::Embedding,
            RequestTask::Llm { .. } => TaskKind::Llm,
        }
    }
}
