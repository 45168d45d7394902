use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tokio_util::sync::CancellationToken;
use vadgor_lang_swedish::SwedishProcessor;

use crate::state::AppState;
use crate::types::AppEvent;

pub mod text_input;

use text_input::handle_text_input;

/// App's main loop
pub async fn event_loop(
    state: Arc<AppState>,
    input_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    processor: Arc<SwedishProcessor>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let max_chars = {
        let config = state.config.read().await;
        config.phrase.max_input_chars
    };

    tracing::debug!("Event loop started");
    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => break,
            event = input_rx.recv() => event?,
        };

        match event {
            AppEvent::TextInput(text) => {
                tracing::debug!("TextInput received: {} bytes", text.len());
                handle_text_input(text, max_chars, processor.as_ref(), &app_to_ui_tx).await?;
            }
            AppEvent::InputClosed => {
                app_to_ui_tx.send(AppEvent::InputClosed).await?;
                break;
            }
            AppEvent::ShowAnalysis(_) => {
                // UI-only event, ignore in backend
            }
        }
    }

    tracing::debug!("Event loop finished");
    Ok(())
}
