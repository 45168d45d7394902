use kanal::AsyncSender;
use vadgor_core::{LanguageProcessor, PhraseAnalysis};

use crate::types::AppEvent;

/// Cut input to at most `max_chars` chars, never splitting a char
pub fn clamp_input(text: &str, max_chars: Option<usize>) -> &str {
    match max_chars.and_then(|max| text.char_indices().nth(max)) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

pub async fn handle_text_input<P: LanguageProcessor + ?Sized>(
    text: String,
    max_chars: Option<usize>,
    processor: &P,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let phrase = clamp_input(&text, max_chars);
    if phrase.len() < text.len() {
        tracing::warn!(
            "Input truncated to {} chars",
            max_chars.unwrap_or_default()
        );
    }

    let analysis = PhraseAnalysis::new(processor, phrase);
    tracing::debug!(
        "Analyzed {} tokens, unknown words: {}",
        analysis.words.len(),
        analysis.has_unknown_words
    );

    app_to_ui_tx.send(AppEvent::ShowAnalysis(analysis)).await?;

    Ok(())
}
