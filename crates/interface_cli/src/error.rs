//! CLI error handling

use thiserror::Error;

use core_kernel::TemporalError;
use domain_policy::PolicyError;

/// CLI error types
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid policy file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Input error: {0}")]
    Input(String),

    #[error("Invalid date: {0}")]
    Date(#[from] TemporalError),

    #[error(transparent)]
    Policy(#[from] PolicyError),

    #[error("Input ended before the policy details were complete")]
    InputClosed,
}

impl CliError {
    /// Creates an input error
    pub fn input(msg: impl Into<String>) -> Self {
        Self::Input(msg.into())
    }
}
