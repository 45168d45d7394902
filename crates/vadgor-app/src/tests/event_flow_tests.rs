//! Interactive event flow: input lines in, rendered analyses out

use std::io::{BufReader, Read};
use std::sync::Arc;
use std::sync::mpsc;
use std::time::Duration;

use kanal::unbounded_async;
use tokio::io::AsyncReadExt;
use tokio::task::JoinSet;
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;
use vadgor_config::Config;
use vadgor_config::output::OutputFormat;
use vadgor_lang_swedish::SwedishProcessor;

use crate::controller::AppController;
use crate::events::event_loop;
use crate::io::spawn_line_reader;
use crate::state::AppState;
use crate::types::AppEvent;

/// Reader whose `read` blocks until its sender is dropped, like an idle stdin
struct StalledReader(mpsc::Receiver<()>);

impl Read for StalledReader {
    fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
        let _ = self.0.recv();
        Ok(0)
    }
}

async fn crashing_task() -> anyhow::Result<()> {
    panic!("render crashed")
}

fn json_config() -> Config {
    let mut config = Config::default();
    config.output.format = OutputFormat::Json;
    config
}

#[tokio::test]
async fn test_line_reader_forwards_lines_then_closes() {
    let (tx, rx) = unbounded_async::<AppEvent>();
    spawn_line_reader("Vad gör denna?\n\nhär".as_bytes(), tx).expect("spawn failed");

    let mut lines = Vec::new();
    loop {
        match timeout(Duration::from_secs(2), rx.recv())
            .await
            .expect("reader timed out")
        {
            Ok(AppEvent::TextInput(text)) => lines.push(text),
            Ok(AppEvent::InputClosed) => break,
            Ok(other) => panic!("Wrong event type: {other:?}"),
            Err(e) => panic!("Channel error: {}", e),
        }
    }
    assert_eq!(lines, ["Vad gör denna?", "", "här"]);
}

#[tokio::test]
async fn test_event_loop_truncates_long_input() {
    let mut config = Config::default();
    config.phrase.max_input_chars = Some(7);
    let state = Arc::new(AppState::new(config));

    let (input_tx, input_rx) = unbounded_async::<AppEvent>();
    let (ui_tx, ui_rx) = unbounded_async::<AppEvent>();

    let handle = tokio::spawn(event_loop(
        state,
        input_rx,
        ui_tx,
        Arc::new(SwedishProcessor::new()),
        CancellationToken::new(),
    ));

    input_tx
        .send(AppEvent::TextInput("Vad gör denna?".to_string()))
        .await
        .unwrap();
    input_tx.send(AppEvent::InputClosed).await.unwrap();

    match timeout(Duration::from_secs(2), ui_rx.recv()).await {
        Ok(Ok(AppEvent::ShowAnalysis(analysis))) => {
            assert_eq!(analysis.phrase, "Vad gör");
            assert_eq!(analysis.summary, "what does / is doing");
        }
        Ok(Ok(other)) => panic!("Wrong event type: {other:?}"),
        Ok(Err(e)) => panic!("Channel error: {}", e),
        Err(_) => panic!("Timeout - analysis never arrived!"),
    }

    assert!(matches!(
        timeout(Duration::from_secs(2), ui_rx.recv()).await,
        Ok(Ok(AppEvent::InputClosed))
    ));

    let result = timeout(Duration::from_secs(2), handle).await.unwrap().unwrap();
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_controller_renders_each_line() {
    let controller = AppController::new(Arc::new(AppState::new(json_config())));
    let reader = "Vad gör denna?\nVad gör du?\n   \n".as_bytes();
    let (writer, mut output) = tokio::io::duplex(64 * 1024);

    let mut tasks = controller
        .spawn_tasks(Arc::new(SwedishProcessor::new()), reader, writer)
        .await
        .unwrap();

    let joined = timeout(Duration::from_secs(5), async {
        while let Some(result) = tasks.join_next().await {
            result.expect("task panicked").expect("task failed");
        }
    })
    .await;
    assert!(joined.is_ok(), "tasks did not finish after EOF");

    let mut rendered = String::new();
    output.read_to_string(&mut rendered).await.unwrap();

    let values: Vec<serde_json::Value> = rendered
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(values.len(), 3);

    assert_eq!(values[0]["summary"], "what does / is doing this one");
    assert_eq!(values[0]["hasUnknownWords"], false);

    assert_eq!(values[1]["summary"], "what does / is doing (du?)");
    assert_eq!(values[1]["hasUnknownWords"], true);

    assert_eq!(values[2]["summary"], "");
    assert_eq!(values[2]["words"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_shutdown_stops_tasks_while_read_blocks() {
    let controller = AppController::new(Arc::new(AppState::new(Config::default())));
    let (_hold, stalled) = mpsc::channel();
    let (writer, _output) = tokio::io::duplex(1024);

    let tasks = controller
        .spawn_tasks(
            Arc::new(SwedishProcessor::new()),
            BufReader::new(StalledReader(stalled)),
            writer,
        )
        .await
        .unwrap();

    let result = timeout(
        Duration::from_secs(2),
        controller.supervise(tasks, tokio::time::sleep(Duration::from_millis(20))),
    )
    .await;
    assert!(matches!(result, Ok(Ok(()))), "tasks did not stop after shutdown");
}

#[test]
fn test_runtime_exits_while_read_blocks() {
    let (done_tx, done_rx) = mpsc::channel();
    let (hold_tx, stalled) = mpsc::channel::<()>();

    std::thread::spawn(move || {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let result = runtime.block_on(async {
            let controller = AppController::new(Arc::new(AppState::new(Config::default())));
            let (writer, _output) = tokio::io::duplex(1024);
            let tasks = controller
                .spawn_tasks(
                    Arc::new(SwedishProcessor::new()),
                    BufReader::new(StalledReader(stalled)),
                    writer,
                )
                .await?;
            controller.supervise(tasks, std::future::ready(())).await
        });
        // Dropping the runtime must not wait on the blocked reader
        drop(runtime);
        let _ = done_tx.send(result.is_ok());
    });

    let finished = done_rx.recv_timeout(Duration::from_secs(5));
    drop(hold_tx);
    assert_eq!(finished, Ok(true));
}

#[tokio::test]
async fn test_supervise_reports_panicked_task() {
    let controller = AppController::new(Arc::new(AppState::new(Config::default())));
    let mut tasks: JoinSet<anyhow::Result<()>> = JoinSet::new();
    tasks.spawn(crashing_task());
    tasks.spawn(async { Ok(()) });

    let result = timeout(
        Duration::from_secs(2),
        controller.supervise(tasks, std::future::pending()),
    )
    .await
    .expect("supervise timed out");

    let err = result.expect_err("panicked task reported as success");
    assert!(err.to_string().contains("panicked"));
}

#[tokio::test]
async fn test_supervise_reports_failed_task() {
    let controller = AppController::new(Arc::new(AppState::new(Config::default())));
    let mut tasks: JoinSet<anyhow::Result<()>> = JoinSet::new();
    tasks.spawn(async { Err(anyhow::anyhow!("write failed")) });

    let err = controller
        .supervise(tasks, std::future::pending())
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "write failed");
}
