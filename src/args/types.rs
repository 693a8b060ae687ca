use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::num::{NonZeroU64, NonZeroUsize};

use crate::error::{AppError, ValidationError};

/// Inference workload sent to the target endpoint.
#[derive(Debug, Clone, Copy, ValueEnum, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TaskKind {
    /// Query plus a window of candidate passages.
    #[value(alias = "tei_rerank")]
    #[serde(alias = "tei_rerank")]
    Rerank,
    /// Single text to embed.
    #[value(alias = "mosec_embedding")]
    #[serde(alias = "mosec_embedding")]
    Embedding,
    /// Single prompt with a generation budget.
    Llm,
}

impl TaskKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            TaskKind::Rerank => "rerank",
            TaskKind::Embedding => "embedding",
            TaskKind::Llm => "llm",
        }
    }
}

impl std::str::FromStr for TaskKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "rerank" | "tei_rerank" => Ok(TaskKind::Rerank),
            "embedding" | "mosec_embedding" => Ok(TaskKind::Embedding),
            "llm" => Ok(TaskKind::Llm),
            _ => Err(AppError::validation(ValidationError::UnsupportedTask {
                value: s.to_owned(),
            })),
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

macro_rules! positive_int {
    ($(#[$meta:meta])* $name:ident, $int:ty, $non_zero:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name($non_zero);

        impl $name {
            #[must_use]
            pub const fn get(self) -> $int {
                self.0.get()
            }
        }

        impl TryFrom<$int> for $name {
            type Error = ValidationError;

            fn try_from(value: $int) -> Result<Self, Self::Error> {
                <$non_zero>::new(value)
                    .map($name)
                    .ok_or(ValidationError::ValueTooSmall { min: 1 })
            }
        }

        impl std::str::FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim()
                    .parse::<$int>()
                    .map_err(|err| ValidationError::InvalidNumber { source: err })
                    .and_then($name::try_from)
            }
        }

        impl From<$name> for $int {
            fn from(value: $name) -> Self {
                value.get()
            }
        }
    };
}

positive_int!(
    /// Request counts and token budgets.
    PositiveU64,
    u64,
    NonZeroU64
);
positive_int!(
    /// Worker and candidate counts.
    PositiveUsize,
    usize,
    NonZeroUsize
);
