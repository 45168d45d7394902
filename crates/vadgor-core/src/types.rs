use serde::Serialize;

use crate::analysis::{analyze, has_unknown_words, summarize};
use crate::dictionary::DictionaryEntry;
use crate::language::{LanguageProcessor, Token};

/// Lookup outcome for a single token
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WordAnalysis {
    /// Original token, casing and punctuation intact
    pub word: String,
    pub normalized: String,
    pub entry: Option<DictionaryEntry>,
    /// Always `entry.is_some()`
    pub is_known: bool,
}

impl WordAnalysis {
    pub fn new(token: Token, entry: Option<DictionaryEntry>) -> Self {
        Self {
            word: token.surface,
            normalized: token.normalized,
            is_known: entry.is_some(),
            entry,
        }
    }

    /// Token was nothing but punctuation
    pub fn is_blank(&self) -> bool {
        self.normalized.is_empty()
    }
}

/// Everything the presentation layer needs for one input value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhraseAnalysis {
    pub phrase: String,
    pub words: Vec<WordAnalysis>,
    pub summary: String,
    pub has_unknown_words: bool,
}

impl PhraseAnalysis {
    /// Run the whole pipeline on a fresh input value
    pub fn new<P: LanguageProcessor + ?Sized>(processor: &P, phrase: &str) -> Self {
        let words = analyze(processor, phrase);
        let summary = summarize(&words);
        let has_unknown_words = has_unknown_words(&words);

        Self {
            phrase: phrase.to_string(),
            words,
            summary,
            has_unknown_words,
        }
    }
}
