use std::collections::HashMap;

use serde::Deserialize;
use vadgor_core::dictionary::{Dictionary, DictionaryEntry, DictionaryMetadata, LoadError};

use crate::processor::normalize_token;

// JSON layout of the bundled dictionary asset
#[derive(Debug, Deserialize)]
struct DictionaryJson {
    name: String,
    version: String,
    language: String,
    entries: Vec<EntryJson>,
}

#[derive(Debug, Deserialize)]
struct EntryJson {
    key: String,
    #[serde(flatten)]
    entry: DictionaryEntry,
}

/// Swedish-English mini-dictionary keyed by normalized word or phrase
#[derive(Debug, Clone)]
pub struct SwedishDictionary {
    name: String,
    version: String,
    language: String,
    entries: HashMap<String, DictionaryEntry>,
}

impl SwedishDictionary {
    pub fn new() -> Self {
        Self {
            name: "empty".to_string(),
            version: "0".to_string(),
            language: "sv-en".to_string(),
            entries: HashMap::new(),
        }
    }

    /// Parse a dictionary from its JSON form.
    ///
    /// Every key must already be in normalized form and appear only once.
    pub fn from_json(json_str: &str) -> Result<Self, LoadError> {
        let data: DictionaryJson =
            serde_json::from_str(json_str).map_err(|e| LoadError::ParseError(e.to_string()))?;

        let mut entries = HashMap::with_capacity(data.entries.len());

        for EntryJson { key, entry } in data.entries {
            if key.is_empty() || normalize_token(&key) != key {
                return Err(LoadError::InvalidFormat(format!(
                    "key '{key}' is not in normalized form"
                )));
            }
            if entry.translation.is_empty() {
                return Err(LoadError::InvalidFormat(format!(
                    "key '{key}' has an empty translation"
                )));
            }
            if entries.insert(key.clone(), entry).is_some() {
                return Err(LoadError::DuplicateKey(key));
            }
        }

        Ok(Self {
            name: data.name,
            version: data.version,
            language: data.language,
            entries,
        })
    }

    /// Get the number of entries in the dictionary
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// All keys, sorted
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}

impl Default for SwedishDictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl Dictionary for SwedishDictionary {
    fn lookup_exact(&self, key: &str) -> Option<&DictionaryEntry> {
        self.entries.get(key)
    }

    fn metadata(&self) -> DictionaryMetadata {
        DictionaryMetadata {
            name: self.name.clone(),
            version: self.version.clone(),
            language: self.language.clone(),
            entry_count: self.entries.len(),
        }
    }
}
