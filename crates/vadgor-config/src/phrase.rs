use serde::{Deserialize, Serialize};

fn default_primary_phrase() -> String {
    "Vad gör denna?".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PhraseConfig {
    /// Phrase analyzed when no input is given
    #[serde(default = "default_primary_phrase")]
    pub primary_phrase: String,
    /// Cap on input length in chars, unlimited when unset
    #[serde(default)]
    pub max_input_chars: Option<usize>,
}

impl Default for PhraseConfig {
    fn default() -> Self {
        Self {
            primary_phrase: default_primary_phrase(),
            max_input_chars: None,
        }
    }
}
