use std::io::BufRead;
use std::thread::{self, JoinHandle};

use kanal::{AsyncSender, Sender};

use crate::types::AppEvent;

/// Forward each input line as a fresh phrase value.
///
/// Reads on a plain thread that is never joined, so a read blocked on an
/// open stdin cannot keep the runtime alive after shutdown.
pub fn spawn_line_reader<R>(
    reader: R,
    event_tx: AsyncSender<AppEvent>,
) -> std::io::Result<JoinHandle<()>>
where
    R: BufRead + Send + 'static,
{
    let event_tx = event_tx.to_sync();
    thread::Builder::new()
        .name("vadgor-input".to_string())
        .spawn(move || read_lines(reader, event_tx))
}

fn read_lines<R: BufRead>(reader: R, event_tx: Sender<AppEvent>) {
    for line in reader.lines() {
        match line {
            Ok(line) => {
                if event_tx.send(AppEvent::TextInput(line)).is_err() {
                    tracing::debug!("Input channel closed");
                    return;
                }
            }
            Err(e) => {
                tracing::error!("Failed to read input: {e}");
                break;
            }
        }
    }

    tracing::debug!("Input closed");
    let _ = event_tx.send(AppEvent::InputClosed);
}
