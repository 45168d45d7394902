pub mod analysis;
pub mod dictionary;
pub mod language;
pub mod types;

pub use analysis::{analyze, has_unknown_words, summarize};
pub use dictionary::{Dictionary, DictionaryEntry, DictionaryMetadata, LoadError};
pub use language::{LanguageProcessor, Token, is_phrase_whitespace};
pub use types::{PhraseAnalysis, WordAnalysis};
