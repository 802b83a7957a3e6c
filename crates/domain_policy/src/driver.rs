//! Drivers, claims, and the policy snapshot
//!
//! A [`PolicyInput`] is the immutable snapshot handed to the rating
//! rules. It is validated once at construction: 1 to 5 drivers, each
//! with a non-empty name and at most 5 claims.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::PolicyError;

/// Maximum number of drivers on one policy
pub const MAX_DRIVERS: usize = 5;

/// Maximum number of claims recorded against one driver
pub const MAX_CLAIMS_PER_DRIVER: usize = 5;

/// Occupations recognised by the rating rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Occupation {
    Chauffeur,
    Accountant,
}

impl Occupation {
    /// Looks up an occupation by its exact single-letter code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "C" => Some(Occupation::Chauffeur),
            "A" => Some(Occupation::Accountant),
            _ => None,
        }
    }
}

impl fmt::Display for Occupation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Occupation::Chauffeur => write!(f, "Chauffeur"),
            Occupation::Accountant => write!(f, "Accountant"),
        }
    }
}

impl FromStr for Occupation {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Chauffeur" => Ok(Occupation::Chauffeur),
            "Accountant" => Ok(Occupation::Accountant),
            other => Occupation::from_code(other)
                .ok_or_else(|| PolicyError::validation(format!("Unknown occupation: {}", other))),
        }
    }
}

/// A historical claim against a driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    /// Date of claim
    pub date: NaiveDate,
}

impl Claim {
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }
}

/// A driver named on the policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Driver {
    /// Display name
    #[validate(length(min = 1, message = "Driver name must not be empty"))]
    pub name: String,
    pub occupation: Occupation,
    pub date_of_birth: NaiveDate,
    /// Claims in the order they were entered
    #[validate(length(max = 5, message = "A driver can have a maximum of 5 claims"))]
    pub claims: Vec<Claim>,
}

impl Driver {
    /// Creates a driver with no claims
    pub fn new(name: impl Into<String>, occupation: Occupation, date_of_birth: NaiveDate) -> Self {
        Self {
            name: name.into(),
            occupation,
            date_of_birth,
            claims: Vec::new(),
        }
    }

    /// Adds claims to the driver
    pub fn with_claims(mut self, claims: impl IntoIterator<Item = Claim>) -> Self {
        self.claims.extend(claims);
        self
    }

    pub fn claim_count(&self) -> usize {
        self.claims.len()
    }

    pub fn has_claims(&self) -> bool {
        !self.claims.is_empty()
    }
}

/// Finds the driver with the latest date of birth
///
/// When several drivers share that date the first one listed wins.
pub fn youngest_driver(drivers: &[Driver]) -> Option<&Driver> {
    drivers.iter().fold(None, |best: Option<&Driver>, driver| match best {
        Some(current) if driver.date_of_birth <= current.date_of_birth => Some(current),
        _ => Some(driver),
    })
}

/// Finds the driver with the earliest date of birth
///
/// When several drivers share that date the first one listed wins.
pub fn oldest_driver(drivers: &[Driver]) -> Option<&Driver> {
    drivers.iter().fold(None, |best: Option<&Driver>, driver| match best {
        Some(current) if driver.date_of_birth >= current.date_of_birth => Some(current),
        _ => Some(driver),
    })
}

/// Counts claims across every driver
pub fn total_claims(drivers: &[Driver]) -> usize {
    drivers.iter().map(Driver::claim_count).sum()
}

/// Validated policy snapshot: start date plus drivers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Validate)]
pub struct PolicyInput {
    start_date: NaiveDate,
    #[validate(
        length(min = 1, max = 5, message = "A policy must have between 1 and 5 drivers"),
        nested
    )]
    drivers: Vec<Driver>,
}

impl PolicyInput {
    /// Creates a policy snapshot, rejecting inputs outside the accepted bounds
    ///
    /// # Errors
    ///
    /// Returns `PolicyError::NoDrivers` for an empty driver list and
    /// `PolicyError::Validation` for any other bound violation.
    pub fn new(start_date: NaiveDate, drivers: Vec<Driver>) -> Result<Self, PolicyError> {
        if drivers.is_empty() {
            return Err(PolicyError::NoDrivers);
        }

        let input = Self { start_date, drivers };
        input.validate()?;
        Ok(input)
    }

    /// Date the policy is to begin
    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Drivers in input order
    pub fn drivers(&self) -> &[Driver] {
        &self.drivers
    }
}
