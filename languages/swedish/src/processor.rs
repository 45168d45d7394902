use vadgor_core::dictionary::{Dictionary, DictionaryEntry, DictionaryMetadata};
use vadgor_core::language::{LanguageProcessor, Token, is_phrase_whitespace};

use crate::dictionary::SwedishDictionary;
use crate::loader::{EMBEDDED_JSON, SwedishDictionaryLoader};

/// Characters stripped anywhere in a token before lookup
pub const REMOVED_CHARS: &[char] = &[
    '!', '?', '.', ',', ';', ':', '(', ')', '[', ']', '"', '“', '”', '\'', '«', '»',
];

/// Trim, lowercase and drop every char in [`REMOVED_CHARS`].
///
/// Trims again after removal so the result is a fixed point for any input,
/// not only for whitespace-free tokens.
pub fn normalize_token(token: &str) -> String {
    let stripped: String = token
        .trim_matches(is_phrase_whitespace)
        .to_lowercase()
        .chars()
        .filter(|c| !REMOVED_CHARS.contains(c))
        .collect();

    let trimmed = stripped.trim_matches(is_phrase_whitespace);
    if trimmed.len() == stripped.len() {
        stripped
    } else {
        trimmed.to_string()
    }
}

/// Swedish language processor
pub struct SwedishProcessor {
    dictionary: SwedishDictionary,
}

impl SwedishProcessor {
    /// Create a processor backed by the embedded dictionary
    pub fn new() -> Self {
        Self::from_json(EMBEDDED_JSON)
    }

    /// Create a processor from dictionary JSON, empty if it does not parse
    pub fn from_json(json: &str) -> Self {
        let dictionary = SwedishDictionaryLoader::load_json(json).unwrap_or_else(|e| {
            tracing::error!("Failed to load dictionary: {}", e);
            tracing::warn!("Starting with empty dictionary");
            SwedishDictionary::new()
        });

        Self::with_dictionary(dictionary)
    }

    pub fn with_dictionary(dictionary: SwedishDictionary) -> Self {
        Self { dictionary }
    }

    pub fn metadata(&self) -> DictionaryMetadata {
        self.dictionary.metadata()
    }
}

impl Default for SwedishProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageProcessor for SwedishProcessor {
    fn language_code(&self) -> &str {
        "sv"
    }

    fn normalize(&self, token: &str) -> String {
        normalize_token(token)
    }

    fn lookup(&self, token: &Token) -> Option<&DictionaryEntry> {
        self.dictionary.lookup_exact(&token.normalized)
    }
}
