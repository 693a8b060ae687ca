use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{AppError, AppResult, ConfigError};

use super::TextPool;

/// Dataset entries are either bare strings or records carrying the text
/// under `text` or `question`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DatasetEntry {
    Text(String),
    Record {
        #[serde(alias = "question")]
        text: String,
    },
}

impl DatasetEntry {
    fn into_text(self) -> String {
        match self {
            DatasetEntry::Text(text) | DatasetEntry::Record { text } => text,
        }
    }
}

/// Parses a JSON array of fragments without checking that it is non-empty.
///
/// # Errors
///
/// Returns the JSON error when the content is not an array of fragments.
pub fn parse_fragments(content: &str) -> Result<Vec<String>, serde_json::Error> {
    let entries: Vec<DatasetEntry> = serde_json::from_str(content)?;
    Ok(entries.into_iter().map(DatasetEntry::into_text).collect())
}

/// Loads a JSON array of text fragments into a [`TextPool`].
///
/// # Errors
///
/// Returns a [`ConfigError`] when the file cannot be read, is not a JSON
/// array of fragments, or is empty.
pub fn load_pool(path: &Path) -> AppResult<TextPool> {
    let content = std::fs::read_to_string(path).map_err(|err| {
        AppError::config(ConfigError::ReadDataset {
            path: path.to_path_buf(),
            source: err,
        })
    })?;
    let items = parse_fragments(&content).map_err(|err| {
        AppError::config(ConfigError::ParseDataset {
            path: path.to_path_buf(),
            source: err,
        })
    })?;
    debug!("Loaded {} fragments from {}", items.len(), path.display());
    TextPool::new(items).map_err(|_empty| {
        AppError::config(ConfigError::DatasetEmpty {
            path: path.to_path_buf(),
        })
    })
}
