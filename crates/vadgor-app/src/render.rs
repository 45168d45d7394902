use std::fmt::{self, Write};

use vadgor_config::output::{OutputConfig, OutputFormat};
use vadgor_core::PhraseAnalysis;
use vadgor_lang_swedish::PrimaryPhrase;

const EMPTY_SUMMARY: &str = "…";
const EMPTY_NORMALIZED: &str = "—";
const UNKNOWN_NOTICE: &str =
    "Some words are outside the mini-dictionary, so they remain in their original form.";
const MISSING_WORD: &str = "This word is not yet in the quick dictionary. Keep it as-is or consult a full translator for nuance.";

pub fn render_analysis(analysis: &PhraseAnalysis, output: &OutputConfig) -> anyhow::Result<String> {
    match output.format {
        OutputFormat::Json => Ok(serde_json::to_string(analysis)?),
        OutputFormat::Text => Ok(analysis_text(analysis, output.show_notes)?),
    }
}

pub fn render_explanation(explained: &PrimaryPhrase, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(explained)?),
        OutputFormat::Text => Ok(explanation_text(explained)?),
    }
}

fn analysis_text(analysis: &PhraseAnalysis, show_notes: bool) -> Result<String, fmt::Error> {
    let mut out = String::new();

    let summary: &str = if analysis.summary.is_empty() {
        EMPTY_SUMMARY
    } else {
        &analysis.summary
    };
    writeln!(out, "Natural translation: {summary}")?;

    if analysis.has_unknown_words {
        writeln!(out, "! {UNKNOWN_NOTICE}")?;
    }

    for item in &analysis.words {
        let normalized: &str = if item.normalized.is_empty() {
            EMPTY_NORMALIZED
        } else {
            &item.normalized
        };
        writeln!(out)?;
        writeln!(out, "{} ({normalized})", item.word)?;

        match &item.entry {
            Some(entry) => {
                writeln!(out, "  {}", entry.translation)?;
                writeln!(out, "  {}", entry.part_of_speech)?;
                if let Some(notes) = entry.notes.as_ref().filter(|_| show_notes) {
                    writeln!(out, "  {notes}")?;
                }
            }
            None => writeln!(out, "  {MISSING_WORD}")?,
        }
    }

    Ok(out)
}

fn explanation_text(explained: &PrimaryPhrase) -> Result<String, fmt::Error> {
    let mut out = String::new();

    writeln!(out, "What does “{}” mean?", explained.phrase)?;
    writeln!(
        out,
        "Literally, the question breaks down into “{}”. {}",
        explained.literal_breakdown, explained.usage
    )?;
    writeln!(out)?;
    writeln!(out, "Straightforward translation: “{}”", explained.natural_translation)?;
    writeln!(out, "{}", explained.description)?;
    writeln!(out)?;

    let width = explained
        .words
        .iter()
        .map(|w| w.word.chars().count())
        .max()
        .unwrap_or(0);
    for word in &explained.words {
        writeln!(
            out,
            "  {:<width$}  {} · {}",
            word.word, word.translation, word.part_of_speech
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Usage tip")?;
    writeln!(out, "{}", explained.usage_tip)?;

    Ok(out)
}
