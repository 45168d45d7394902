use kanal::AsyncReceiver;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio_util::sync::CancellationToken;
use vadgor_config::output::OutputConfig;

use crate::render::render_analysis;
use crate::types::AppEvent;

/// Render every analysis the event loop produces
pub async fn ui_loop<W>(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    output: OutputConfig,
    mut out: W,
    cancel: CancellationToken,
) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
{
    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => break,
            event = app_to_ui_rx.recv() => event?,
        };

        match event {
            AppEvent::ShowAnalysis(analysis) => {
                let mut rendered = render_analysis(&analysis, &output)?;
                if !rendered.ends_with('\n') {
                    rendered.push('\n');
                }
                out.write_all(rendered.as_bytes()).await?;
                out.flush().await?;
            }
            AppEvent::InputClosed => break,
            AppEvent::TextInput(_) => {}
        }
    }

    Ok(())
}
