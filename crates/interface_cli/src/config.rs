//! CLI configuration

use std::path::PathBuf;
use std::sync::Arc;

use serde::Deserialize;

use core_kernel::{parse_uk_date, Clock, FixedClock, SystemClock};

use crate::error::CliError;

/// How quote results are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable sentences
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// CLI configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CliConfig {
    /// Log level used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Result rendering
    #[serde(default)]
    pub output: OutputFormat,
    /// JSON policy file; prompts are skipped when set
    #[serde(default)]
    pub input_file: Option<PathBuf>,
    /// Overrides today's date (DD/MM/YYYY)
    #[serde(default)]
    pub as_of: Option<String>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            output: OutputFormat::Text,
            input_file: None,
            as_of: None,
        }
    }
}

impl CliConfig {
    /// Loads configuration from `QUOTE_*` environment variables
    pub fn from_env() -> Result<Self, CliError> {
        Self::from_source(config::Environment::with_prefix("QUOTE"))
    }

    /// Loads configuration from any `config` source
    pub fn from_source<S>(source: S) -> Result<Self, CliError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let config = config::Config::builder()
            .add_source(source)
            .build()?
            .try_deserialize()?;
        Ok(config)
    }

    /// Clock for the start-date rule: pinned when `as_of` is set
    pub fn clock(&self) -> Result<Arc<dyn Clock>, CliError> {
        match &self.as_of {
            Some(text) => Ok(Arc::new(FixedClock::new(parse_uk_date(text)?))),
            None => Ok(Arc::new(SystemClock)),
        }
    }
}
