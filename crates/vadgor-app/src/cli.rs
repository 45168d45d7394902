use std::path::PathBuf;

use clap::{Parser, Subcommand};
use vadgor_config::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "vadgor")]
#[command(about = "Word-by-word explainer for Swedish phrases", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// JSON config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format: text or json
    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Analyze a phrase once
    Analyze {
        /// Phrase words, joined with single spaces
        #[arg(allow_hyphen_values = true)]
        words: Vec<String>,
    },
    /// Explain the primary phrase "Vad gör denna?"
    Explain,
    /// Re-analyze every line read from stdin
    Interactive,
}
