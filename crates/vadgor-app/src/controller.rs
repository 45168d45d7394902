use std::future::Future;
use std::io::BufRead;
use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tokio::io::AsyncWrite;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use vadgor_lang_swedish::SwedishProcessor;

use crate::events::event_loop;
use crate::io::spawn_line_reader;
use crate::state::AppState;
use crate::types::AppEvent;
use crate::ui::ui_loop;

/// Centralized channel management
pub struct ChannelSet {
    pub input_to_app: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    pub app_to_ui: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            input_to_app: kanal::bounded_async(64), // pasted input bursts
            app_to_ui: kanal::bounded_async(64),
        }
    }
}

impl Default for ChannelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            channels: ChannelSet::new(),
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    /// Start the event and UI tasks plus the detached input reader thread
    pub async fn spawn_tasks<R, W>(
        &self,
        processor: Arc<SwedishProcessor>,
        reader: R,
        writer: W,
    ) -> anyhow::Result<JoinSet<anyhow::Result<()>>>
    where
        R: BufRead + Send + 'static,
        W: AsyncWrite + Unpin + Send + 'static,
    {
        let output = {
            let config = self.state.config.read().await;
            config.output.clone()
        };

        let mut tasks = JoinSet::new();

        // Event loop
        tasks.spawn(event_loop(
            self.state.clone(),
            self.channels.input_to_app.1.clone(),
            self.channels.app_to_ui.0.clone(),
            processor,
            self.cancel_token.child_token(),
        ));

        // UI loop
        tasks.spawn(ui_loop(
            self.channels.app_to_ui.1.clone(),
            output,
            writer,
            self.cancel_token.child_token(),
        ));

        // Input reader
        spawn_line_reader(reader, self.channels.input_to_app.0.clone())?;

        Ok(tasks)
    }

    /// Wait for all tasks, cancelling them once `shutdown` resolves.
    ///
    /// The first failed or panicked task ends the run with its error.
    pub async fn supervise<F>(
        &self,
        mut tasks: JoinSet<anyhow::Result<()>>,
        shutdown: F,
    ) -> anyhow::Result<()>
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);
        let mut shutdown_requested = false;

        loop {
            tokio::select! {
                _ = &mut shutdown, if !shutdown_requested => {
                    tracing::info!("Shutdown requested");
                    shutdown_requested = true;
                    self.shutdown();
                }
                result = tasks.join_next() => match result {
                    Some(Ok(Ok(()))) => {}
                    Some(Ok(Err(e))) => {
                        tracing::error!("task failed: {e}");
                        self.shutdown();
                        return Err(e);
                    }
                    Some(Err(e)) => {
                        tracing::error!("task panicked: {e}");
                        self.shutdown();
                        return Err(anyhow::anyhow!("task panicked: {e}"));
                    }
                    None => return Ok(()),
                },
            }
        }
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
