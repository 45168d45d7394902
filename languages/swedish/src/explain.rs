//! Fixed explanation of the phrase the whole tool is built around.

use serde::Serialize;
use vadgor_core::analysis::analyze;
use vadgor_core::language::LanguageProcessor;

pub const PRIMARY_PHRASE: &str = "Vad gör denna?";

const LITERAL_BREAKDOWN: &str = "what / does / this one";
const NATURAL_TRANSLATION: &str = "What does this do?";
const USAGE: &str = "Usually used when pointing at an object to ask what it does or what its purpose is.";
const DESCRIPTION: &str = "The phrase is a direct question about the function or effect of the specific thing the speaker is referring to.";
const USAGE_TIP: &str = "“Denna” is formal or written Swedish. In everyday speech you are more likely to hear “Vad gör den här?” or, when referring to a device, “Vad gör den här knappen?” meaning “What does this button do?”.";

const MISSING_TRANSLATION: &str = "—";
const MISSING_PART_OF_SPEECH: &str = "outside mini-dictionary";

/// One line of the per-word breakdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrimaryWord {
    pub word: String,
    pub translation: String,
    pub part_of_speech: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrimaryPhrase {
    pub phrase: String,
    pub literal_breakdown: String,
    pub usage: String,
    pub natural_translation: String,
    pub description: String,
    pub words: Vec<PrimaryWord>,
    pub usage_tip: String,
}

impl PrimaryPhrase {
    /// Build the explanation, taking the word list from a live analysis
    pub fn build<P: LanguageProcessor + ?Sized>(processor: &P) -> Self {
        let words = analyze(processor, PRIMARY_PHRASE)
            .into_iter()
            .map(|item| match item.entry {
                Some(entry) => PrimaryWord {
                    word: item.word,
                    translation: entry.translation,
                    part_of_speech: entry.part_of_speech,
                },
                None => PrimaryWord {
                    word: item.word,
                    translation: MISSING_TRANSLATION.to_string(),
                    part_of_speech: MISSING_PART_OF_SPEECH.to_string(),
                },
            })
            .collect();

        Self {
            phrase: PRIMARY_PHRASE.to_string(),
            literal_breakdown: LITERAL_BREAKDOWN.to_string(),
            usage: USAGE.to_string(),
            natural_translation: NATURAL_TRANSLATION.to_string(),
            description: DESCRIPTION.to_string(),
            words,
            usage_tip: USAGE_TIP.to_string(),
        }
    }
}
