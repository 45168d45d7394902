use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use self::log::LogConfig;
use self::output::{OutputConfig, OutputFormat};
use self::phrase::PhraseConfig;

pub mod log;
pub mod output;
pub mod phrase;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub phrase: PhraseConfig,
    pub output: OutputConfig,
    pub log: LogConfig,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Parse error in {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

impl Config {
    /// Defaults with environment overrides applied
    pub fn new() -> Self {
        let mut config = Config::default();
        config.apply_env();
        config
    }

    /// Load a JSON config file, then apply environment overrides
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        tracing::info!("Loading config from {}", path.display());
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let mut config = Self::from_json(&data).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;
        config.apply_env();
        Ok(config)
    }

    pub fn from_json(data: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(data)
    }

    fn apply_env(&mut self) {
        self.apply_overrides(|key| env::var(key).ok());
    }

    /// Apply overrides from a key lookup; unparsable values are logged and ignored
    pub fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(phrase) = var("VADGOR_PRIMARY_PHRASE") {
            self.phrase.primary_phrase = phrase;
        }

        if let Some(raw) = var("VADGOR_MAX_INPUT_CHARS") {
            match raw.parse::<usize>() {
                Ok(0) => self.phrase.max_input_chars = None,
                Ok(max) => self.phrase.max_input_chars = Some(max),
                Err(e) => tracing::warn!("Ignoring VADGOR_MAX_INPUT_CHARS={raw}: {e}"),
            }
        }

        if let Some(raw) = var("VADGOR_OUTPUT_FORMAT") {
            match raw.parse::<OutputFormat>() {
                Ok(format) => self.output.format = format,
                Err(e) => tracing::warn!("Ignoring VADGOR_OUTPUT_FORMAT: {e}"),
            }
        }

        if let Some(filter) = var("VADGOR_LOG") {
            self.log.filter = filter;
        }

        if let Some(raw) = var("VADGOR_LOG_JSON") {
            self.log.json = matches!(raw.trim(), "1" | "true" | "TRUE" | "yes");
        }
    }
}
