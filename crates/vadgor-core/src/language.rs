use crate::dictionary::DictionaryEntry;

/// Separator set for phrases and token edges: ECMAScript `\s`.
///
/// Unlike `char::is_whitespace` this includes U+FEFF (so a leading BOM is
/// dropped) and excludes U+0085.
pub fn is_phrase_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{000B}'
            | '\u{000C}'
            | '\r'
            | ' '
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Text processing and lookup interface for language implementations
pub trait LanguageProcessor: Send + Sync {
    /// Language identifier (ISO 639-1 code: "sv", "no", "da", etc.)
    fn language_code(&self) -> &str;

    /// Reduce a single token to its dictionary lookup key
    fn normalize(&self, token: &str) -> String;

    /// Break a phrase into whitespace-delimited tokens, left to right
    fn tokenize(&self, text: &str) -> Vec<Token> {
        text.split(is_phrase_whitespace)
            .filter(|surface| !surface.is_empty())
            .enumerate()
            .map(|(position, surface)| Token {
                surface: surface.to_string(),
                normalized: self.normalize(surface),
                position,
            })
            .collect()
    }

    /// Look up a token in the dictionary
    fn lookup(&self, token: &Token) -> Option<&DictionaryEntry>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Token exactly as it appeared in the input
    pub surface: String,
    pub normalized: String,
    /// Zero-based index among the phrase's tokens
    pub position: usize,
}
