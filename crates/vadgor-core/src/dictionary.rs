use serde::{Deserialize, Serialize};

/// Read-only keyed dictionary
pub trait Dictionary: Send + Sync {
    /// Search dictionary by exact key match
    fn lookup_exact(&self, key: &str) -> Option<&DictionaryEntry>;

    /// Get dictionary metadata
    fn metadata(&self) -> DictionaryMetadata;
}

/// Translation metadata for one word or fixed phrase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryEntry {
    pub translation: String,
    pub part_of_speech: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Word-for-word rendering, carried but not shown anywhere yet
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub literal: Option<String>,
}

#[derive(Debug, Clone)]
pub struct DictionaryMetadata {
    pub name: String,
    pub version: String,
    /// Source and target language, e.g. "sv-en"
    pub language: String,
    pub entry_count: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Duplicate key: {0}")]
    DuplicateKey(String),
}
