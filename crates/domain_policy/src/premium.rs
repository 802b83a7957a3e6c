//! Premium calculation
//!
//! The premium starts at [`STARTING_POINT`] and passes through a fixed
//! pipeline of rules. Each rule takes the premium produced by the rules
//! before it, so percentage adjustments compound:
//!
//! ```text
//! 500 -> chauffeur (+10%) -> accountant (-10%) -> youngest driver age -> claims
//! ```
//!
//! Percentages are applied with truncating integer division at every
//! step.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use core_kernel::{age_on_date, shift_years};

use crate::driver::{youngest_driver, Driver, Occupation, PolicyInput};
use crate::error::PolicyError;

/// Premium before any adjustment
pub const STARTING_POINT: u32 = 500;

/// A premium in whole currency units
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Premium(u32);

impl Premium {
    pub const fn new(amount: u32) -> Self {
        Self(amount)
    }

    /// The fixed starting point for every quote
    pub const fn starting_point() -> Self {
        Self(STARTING_POINT)
    }

    pub fn amount(&self) -> u32 {
        self.0
    }

    /// Adds `percent` of the premium, truncating the adjustment
    pub fn increase_by_percent(self, percent: u32) -> Self {
        Self(self.0.saturating_add(self.percent_of(percent)))
    }

    /// Subtracts `percent` of the premium, truncating the adjustment
    pub fn decrease_by_percent(self, percent: u32) -> Self {
        Self(self.0.saturating_sub(self.percent_of(percent)))
    }

    fn percent_of(&self, percent: u32) -> u32 {
        let scaled = u64::from(self.0) * u64::from(percent) / 100;
        u32::try_from(scaled).unwrap_or(u32::MAX)
    }
}

impl Default for Premium {
    fn default() -> Self {
        Self::starting_point()
    }
}

impl fmt::Display for Premium {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Premium> for u32 {
    fn from(premium: Premium) -> Self {
        premium.0
    }
}

/// A single pricing step in the premium pipeline
pub type PremiumRule = fn(Premium, NaiveDate, &[Driver]) -> Premium;

/// Premium rules in application order
pub const PREMIUM_RULES: [(&str, PremiumRule); 4] = [
    ("chauffeur", chauffeur_rule),
    ("accountant", accountant_rule),
    ("youngest_driver_age", youngest_driver_age_rule),
    ("claims_history", claims_history_rule),
];

/// If any driver is a chauffeur, increase the premium by 10%
fn chauffeur_rule(premium: Premium, _start_date: NaiveDate, drivers: &[Driver]) -> Premium {
    if drivers.iter().any(|d| d.occupation == Occupation::Chauffeur) {
        premium.increase_by_percent(10)
    } else {
        premium
    }
}

/// If any driver is an accountant, decrease the premium by 10%
fn accountant_rule(premium: Premium, _start_date: NaiveDate, drivers: &[Driver]) -> Premium {
    if drivers.iter().any(|d| d.occupation == Occupation::Accountant) {
        premium.decrease_by_percent(10)
    } else {
        premium
    }
}

/// Youngest driver aged 21-25 on the start date: +20%; aged 26-75: -10%
fn youngest_driver_age_rule(premium: Premium, start_date: NaiveDate, drivers: &[Driver]) -> Premium {
    let Some(youngest) = youngest_driver(drivers) else {
        return premium;
    };

    match age_on_date(youngest.date_of_birth, start_date) {
        21..=25 => premium.increase_by_percent(20),
        26..=75 => premium.decrease_by_percent(10),
        _ => premium,
    }
}

/// Per claim: within a year of the start date +20%; otherwise +10% when
/// the claim falls between start-2y and start-5y as written
///
/// The second window compares `>= start-2y` and `<= start-5y`, which no
/// date satisfies. It is kept exactly as the rating rules state it.
fn claims_history_rule(premium: Premium, start_date: NaiveDate, drivers: &[Driver]) -> Premium {
    let one_year_back = shift_years(start_date, -1);
    let two_years_back = shift_years(start_date, -2);
    let five_years_back = shift_years(start_date, -5);

    drivers
        .iter()
        .filter(|driver| driver.has_claims())
        .flat_map(|driver| driver.claims.iter())
        .fold(premium, |premium, claim| {
            if claim.date >= one_year_back {
                premium.increase_by_percent(20)
            } else if claim.date >= two_years_back && claim.date <= five_years_back {
                premium.increase_by_percent(10)
            } else {
                premium
            }
        })
}

/// Applies the premium pipeline to a policy
#[derive(Debug, Clone, Copy, Default)]
pub struct PremiumCalculator;

impl PremiumCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Calculates the premium for a policy that has passed decline checks
    ///
    /// # Errors
    ///
    /// Returns `PolicyError::NoDrivers` if `drivers` is empty.
    pub fn calculate(&self, start_date: NaiveDate, drivers: &[Driver]) -> Result<Premium, PolicyError> {
        if drivers.is_empty() {
            return Err(PolicyError::NoDrivers);
        }

        let premium = PREMIUM_RULES
            .into_iter()
            .fold(Premium::starting_point(), |premium, (rule, apply)| {
                let adjusted = apply(premium, start_date, drivers);
                if adjusted != premium {
                    debug!(rule, from = premium.amount(), to = adjusted.amount(), "Premium adjusted");
                }
                adjusted
            });

        info!(premium = premium.amount(), drivers = drivers.len(), "Premium calculated");
        Ok(premium)
    }

    /// Calculates the premium for a validated policy snapshot
    pub fn calculate_policy(&self, policy: &PolicyInput) -> Result<Premium, PolicyError> {
        self.calculate(policy.start_date(), policy.drivers())
    }
}

/// Calculates the premium for a policy that has passed decline checks
///
/// # Errors
///
/// Returns `PolicyError::NoDrivers` if `drivers` is empty.
pub fn calculate_premium(start_date: NaiveDate, drivers: &[Driver]) -> Result<Premium, PolicyError> {
    PremiumCalculator::new().calculate(start_date, drivers)
}
