use std::sync::Arc;

use clap::Parser;
use tokio::io::AsyncWriteExt;
use tokio::signal;
use vadgor_config::Config;
use vadgor_core::PhraseAnalysis;
use vadgor_lang_swedish::{PrimaryPhrase, SwedishProcessor};

pub mod cli;
pub mod controller;
pub mod events;
pub mod io;
pub mod logging;
pub mod render;
pub mod state;
pub mod types;
pub mod ui;

#[cfg(test)]
mod tests;

use self::cli::{Cli, Command};
use self::controller::AppController;
use self::events::text_input::clamp_input;
use self::render::{render_analysis, render_explanation};
use self::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::new(),
    };
    if let Some(format) = cli.format {
        config.output.format = format;
    }

    logging::init(&config.log)?;

    let processor = Arc::new(SwedishProcessor::new());
    let metadata = processor.metadata();
    tracing::debug!(
        "Dictionary '{}' v{} ({}), {} entries",
        metadata.name,
        metadata.version,
        metadata.language,
        metadata.entry_count
    );

    let command = cli.command.unwrap_or(Command::Analyze {
        words: vec![config.phrase.primary_phrase.clone()],
    });

    match command {
        Command::Analyze { words } => {
            let text = words.join(" ");
            let phrase = clamp_input(&text, config.phrase.max_input_chars);
            let analysis = PhraseAnalysis::new(processor.as_ref(), phrase);
            print_block(render_analysis(&analysis, &config.output)?).await?;
        }
        Command::Explain => {
            let explained = PrimaryPhrase::build(processor.as_ref());
            print_block(render_explanation(&explained, config.output.format)?).await?;
        }
        Command::Interactive => {
            run_interactive(AppState::new(config), processor).await?;
        }
    }

    Ok(())
}

async fn print_block(mut text: String) -> anyhow::Result<()> {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    let mut stdout = tokio::io::stdout();
    stdout.write_all(text.as_bytes()).await?;
    stdout.flush().await?;
    Ok(())
}

async fn run_interactive(state: AppState, processor: Arc<SwedishProcessor>) -> anyhow::Result<()> {
    if atty::is(atty::Stream::Stdin) {
        eprintln!("Skriv en svensk fras… (one phrase per line, Ctrl+D to finish)");
    }

    let controller = AppController::new(Arc::new(state));
    let tasks = controller
        .spawn_tasks(
            processor,
            std::io::BufReader::new(std::io::stdin()),
            tokio::io::stdout(),
        )
        .await?;

    let shutdown = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to listen for ctrl+c: {e}");
            std::future::pending::<()>().await;
        }
    };

    controller.supervise(tasks, shutdown).await
}
