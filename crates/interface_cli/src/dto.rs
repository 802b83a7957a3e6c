//! Policy file and quote result DTOs
//!
//! Non-interactive input is a JSON document describing the policy, with all
//! dates written as `DD/MM/YYYY`:
//!
//! ```json
//! {
//!   "start_date": "06/10/2030",
//!   "drivers": [
//!     {
//!       "name": "Alice",
//!       "occupation": "Accountant",
//!       "date_of_birth": "14/02/1990",
//!       "claims": [{ "date": "01/03/2029" }]
//!     }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use core_kernel::temporal::uk_date;
use domain_policy::{Claim, Driver, Occupation, PolicyInput, QuoteOutcome};

use crate::error::CliError;

/// A policy as written in an input file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyFile {
    #[serde(with = "uk_date")]
    pub start_date: NaiveDate,
    pub drivers: Vec<DriverRecord>,
}

/// A driver as written in an input file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriverRecord {
    pub name: String,
    pub occupation: Occupation,
    #[serde(with = "uk_date")]
    pub date_of_birth: NaiveDate,
    #[serde(default)]
    pub claims: Vec<ClaimRecord>,
}

/// A claim as written in an input file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimRecord {
    #[serde(with = "uk_date")]
    pub date: NaiveDate,
}

impl From<DriverRecord> for Driver {
    fn from(record: DriverRecord) -> Self {
        Driver::new(record.name, record.occupation, record.date_of_birth)
            .with_claims(record.claims.into_iter().map(|c| Claim::new(c.date)))
    }
}

impl PolicyFile {
    /// Converts to a validated policy snapshot
    pub fn into_policy(self) -> Result<PolicyInput, CliError> {
        let drivers = self.drivers.into_iter().map(Driver::from).collect();
        Ok(PolicyInput::new(self.start_date, drivers)?)
    }
}

/// A quote result as written in JSON output
///
/// A declined quote carries the reason text; an accepted one the premium.
#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub outcome: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub premium: Option<u32>,
}

impl From<&QuoteOutcome> for QuoteResponse {
    fn from(outcome: &QuoteOutcome) -> Self {
        match outcome {
            QuoteOutcome::Declined { reason } => Self {
                outcome: "declined".to_string(),
                reason: Some(reason.to_string()),
                premium: None,
            },
            QuoteOutcome::Quoted { premium } => Self {
                outcome: "quoted".to_string(),
                reason: None,
                premium: Some(premium.amount()),
            },
        }
    }
}

/// Reads and validates a JSON policy file
pub fn load_policy_file(path: &Path) -> Result<PolicyInput, CliError> {
    let text = fs::read_to_string(path)
        .map_err(|e| CliError::input(format!("cannot read {}: {}", path.display(), e)))?;
    let file: PolicyFile = serde_json::from_str(&text)?;

    debug!(path = %path.display(), drivers = file.drivers.len(), "Policy file loaded");
    file.into_policy()
}
