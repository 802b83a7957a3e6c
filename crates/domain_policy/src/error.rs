//! Policy domain errors
//!
//! This module defines the error types that can occur within the
//! rating domain. A declined policy is not an error; see
//! [`crate::decline::DeclineDecision`].

use thiserror::Error;

/// Errors that can occur in the policy domain
#[derive(Debug, Error)]
pub enum PolicyError {
    /// Youngest/oldest driver lookups need at least one driver
    #[error("Policy must have at least one driver")]
    NoDrivers,

    /// Policy input failed boundary validation
    #[error("Validation error: {0}")]
    Validation(String),
}

impl PolicyError {
    /// Creates a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        PolicyError::Validation(message.into())
    }
}

impl From<validator::ValidationErrors> for PolicyError {
    fn from(errors: validator::ValidationErrors) -> Self {
        PolicyError::Validation(errors.to_string())
    }
}
