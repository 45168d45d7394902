use crate::language::LanguageProcessor;
use crate::types::WordAnalysis;

/// Tokenize a phrase and look every token up, keeping input order.
///
/// Tokens are single words, so multi-word dictionary keys never match here.
pub fn analyze<P: LanguageProcessor + ?Sized>(processor: &P, phrase: &str) -> Vec<WordAnalysis> {
    processor
        .tokenize(phrase)
        .into_iter()
        .map(|token| {
            let entry = processor.lookup(&token).cloned();
            WordAnalysis::new(token, entry)
        })
        .collect()
}

/// Best-effort rendering of a phrase from its per-word translations.
///
/// Unknown words are kept in their original form inside parentheses;
/// pure punctuation tokens contribute nothing.
pub fn summarize(analysis: &[WordAnalysis]) -> String {
    analysis
        .iter()
        .filter_map(|item| match &item.entry {
            Some(entry) => Some(entry.translation.clone()),
            None if item.is_blank() => None,
            None => Some(format!("({})", item.word)),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// True when some real word (not bare punctuation) missed the dictionary
pub fn has_unknown_words(analysis: &[WordAnalysis]) -> bool {
    analysis.iter().any(|item| !item.is_known && !item.is_blank())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::dictionary::DictionaryEntry;
    use crate::language::Token;

    struct TestProcessor {
        entries: HashMap<String, DictionaryEntry>,
    }

    impl TestProcessor {
        fn new(words: &[(&str, &str)]) -> Self {
            let entries = words
                .iter()
                .map(|(key, translation)| {
                    (
                        key.to_string(),
                        DictionaryEntry {
                            translation: translation.to_string(),
                            part_of_speech: "test".to_string(),
                            notes: None,
                            literal: None,
                        },
                    )
                })
                .collect();
            Self { entries }
        }
    }

    impl LanguageProcessor for TestProcessor {
        fn language_code(&self) -> &str {
            "xx"
        }

        fn normalize(&self, token: &str) -> String {
            token
                .to_lowercase()
                .chars()
                .filter(|c| !c.is_ascii_punctuation())
                .collect()
        }

        fn lookup(&self, token: &Token) -> Option<&DictionaryEntry> {
            self.entries.get(&token.normalized)
        }
    }

    fn processor() -> TestProcessor {
        TestProcessor::new(&[("hej", "hello"), ("du", "you")])
    }

    #[test]
    fn test_analyze_keeps_order_and_surface() {
        let words = analyze(&processor(), "Hej  x du!");

        let surfaces: Vec<_> = words.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(surfaces, ["Hej", "x", "du!"]);

        let normalized: Vec<_> = words.iter().map(|w| w.normalized.as_str()).collect();
        assert_eq!(normalized, ["hej", "x", "du"]);

        assert!(words[0].is_known);
        assert!(!words[1].is_known);
        assert!(words[1].entry.is_none());
        assert!(words[2].is_known);
    }

    #[test]
    fn test_analyze_empty_input() {
        assert!(analyze(&processor(), "").is_empty());
        assert!(analyze(&processor(), " \t\n ").is_empty());
    }

    #[test]
    fn test_summarize_wraps_unknown_words() {
        let words = analyze(&processor(), "Hej vän?");
        assert_eq!(summarize(&words), "hello (vän?)");
    }

    #[test]
    fn test_summarize_drops_bare_punctuation() {
        let words = analyze(&processor(), "hej ?! du");
        assert_eq!(words.len(), 3);
        assert_eq!(summarize(&words), "hello you");
        assert!(!has_unknown_words(&words));
    }

    #[test]
    fn test_summarize_empty() {
        assert_eq!(summarize(&[]), "");
    }

    #[test]
    fn test_has_unknown_words() {
        assert!(has_unknown_words(&analyze(&processor(), "hej okänd")));
        assert!(!has_unknown_words(&analyze(&processor(), "HEJ du.")));
        assert!(!has_unknown_words(&[]));
    }
}
