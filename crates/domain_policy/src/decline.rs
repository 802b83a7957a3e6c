//! Decline rules
//!
//! Eligibility checks run in a fixed order before any premium is
//! calculated. Evaluation stops at the first rule that fails and reports
//! its reason:
//!
//! 1. Start date of the policy is before today
//! 2. Youngest driver is under 21 on the start date
//! 3. Oldest driver is over 75 on the start date
//! 4. More than 3 claims across the policy
//! 5. A driver has more than 2 claims (first such driver reported)

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use core_kernel::{age_on_date, Clock, SystemClock};

use crate::driver::{oldest_driver, total_claims, youngest_driver, Driver, PolicyInput};
use crate::error::PolicyError;

/// Youngest permitted driver age on the start date
pub const MIN_DRIVER_AGE: u32 = 21;

/// Oldest permitted driver age on the start date
pub const MAX_DRIVER_AGE: u32 = 75;

/// Most claims a policy may carry in total
pub const MAX_POLICY_CLAIMS: usize = 3;

/// Most claims any single driver may carry
pub const MAX_DRIVER_CLAIMS: usize = 2;

/// Why a policy was declined
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeclineReason {
    StartDateInPast,
    YoungestDriverUnderAge,
    OldestDriverOverAge { driver_name: String },
    TooManyPolicyClaims,
    DriverHasTooManyClaims { driver_name: String },
}

impl fmt::Display for DeclineReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeclineReason::StartDateInPast => write!(f, "Start Date of Policy"),
            DeclineReason::YoungestDriverUnderAge => write!(f, "Age of Youngest Driver"),
            DeclineReason::OldestDriverOverAge { driver_name } => {
                write!(f, "Age of Oldest Driver - {}", driver_name)
            }
            DeclineReason::TooManyPolicyClaims => write!(f, "Policy has more than 3 claims."),
            DeclineReason::DriverHasTooManyClaims { driver_name } => {
                write!(f, "Driver has more than 2 claims - {}", driver_name)
            }
        }
    }
}

/// Outcome of decline evaluation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeclineDecision {
    Accepted,
    Declined(DeclineReason),
}

impl DeclineDecision {
    pub fn is_declined(&self) -> bool {
        matches!(self, DeclineDecision::Declined(_))
    }

    /// The reason, when declined
    pub fn reason(&self) -> Option<&DeclineReason> {
        match self {
            DeclineDecision::Accepted => None,
            DeclineDecision::Declined(reason) => Some(reason),
        }
    }

    /// Human-readable reason text, when declined
    pub fn reason_text(&self) -> Option<String> {
        self.reason().map(ToString::to_string)
    }
}

/// Facts a decline rule may look at
#[derive(Debug, Clone, Copy)]
pub struct DeclineContext<'a> {
    pub today: NaiveDate,
    pub start_date: NaiveDate,
    pub drivers: &'a [Driver],
}

/// A single decline check; `Some` means the policy is declined
pub type DeclineRule = fn(&DeclineContext<'_>) -> Option<DeclineReason>;

/// Decline rules in evaluation order
pub const DECLINE_RULES: [(&str, DeclineRule); 5] = [
    ("start_date_before_today", start_date_before_today),
    ("youngest_driver_under_age", youngest_driver_under_age),
    ("oldest_driver_over_age", oldest_driver_over_age),
    ("policy_claims_exceed_limit", policy_claims_exceed_limit),
    ("driver_claims_exceed_limit", driver_claims_exceed_limit),
];

fn start_date_before_today(ctx: &DeclineContext<'_>) -> Option<DeclineReason> {
    (ctx.start_date < ctx.today).then_some(DeclineReason::StartDateInPast)
}

fn youngest_driver_under_age(ctx: &DeclineContext<'_>) -> Option<DeclineReason> {
    let youngest = youngest_driver(ctx.drivers)?;
    let age = age_on_date(youngest.date_of_birth, ctx.start_date);
    (age < MIN_DRIVER_AGE).then_some(DeclineReason::YoungestDriverUnderAge)
}

fn oldest_driver_over_age(ctx: &DeclineContext<'_>) -> Option<DeclineReason> {
    let oldest = oldest_driver(ctx.drivers)?;
    let age = age_on_date(oldest.date_of_birth, ctx.start_date);
    (age > MAX_DRIVER_AGE).then(|| DeclineReason::OldestDriverOverAge {
        driver_name: oldest.name.clone(),
    })
}

fn policy_claims_exceed_limit(ctx: &DeclineContext<'_>) -> Option<DeclineReason> {
    (total_claims(ctx.drivers) > MAX_POLICY_CLAIMS).then_some(DeclineReason::TooManyPolicyClaims)
}

/// Finds the first driver, in input order, with more than
/// [`MAX_DRIVER_CLAIMS`] claims; later offenders are not reported
fn driver_claims_exceed_limit(ctx: &DeclineContext<'_>) -> Option<DeclineReason> {
    ctx.drivers
        .iter()
        .find(|driver| driver.claim_count() > MAX_DRIVER_CLAIMS)
        .map(|driver| DeclineReason::DriverHasTooManyClaims {
            driver_name: driver.name.clone(),
        })
}

/// Runs the decline rules against a policy
///
/// "Today" is read from the supplied [`Clock`], which defaults to the
/// local system date.
///
/// # Example
///
/// ```rust,ignore
/// let evaluator = DeclineEvaluator::with_clock(FixedClock::new(today));
/// match evaluator.evaluate(start_date, &drivers)? {
///     DeclineDecision::Accepted => { /* rate it */ }
///     DeclineDecision::Declined(reason) => println!("Reason: {}", reason),
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct DeclineEvaluator<C = SystemClock> {
    clock: C,
}

impl DeclineEvaluator<SystemClock> {
    /// Creates an evaluator reading the system date
    pub fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl<C: Clock> DeclineEvaluator<C> {
    /// Creates an evaluator with an explicit clock
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// Evaluates the decline rules in order, stopping at the first failure
    ///
    /// # Errors
    ///
    /// Returns `PolicyError::NoDrivers` if `drivers` is empty.
    pub fn evaluate(
        &self,
        start_date: NaiveDate,
        drivers: &[Driver],
    ) -> Result<DeclineDecision, PolicyError> {
        if drivers.is_empty() {
            return Err(PolicyError::NoDrivers);
        }

        let ctx = DeclineContext {
            today: self.clock.today(),
            start_date,
            drivers,
        };

        for (rule, check) in DECLINE_RULES {
            if let Some(reason) = check(&ctx) {
                info!(rule, reason = %reason, "Policy declined");
                return Ok(DeclineDecision::Declined(reason));
            }
            debug!(rule, "Decline rule passed");
        }

        Ok(DeclineDecision::Accepted)
    }

    /// Evaluates a validated policy snapshot
    pub fn evaluate_policy(&self, policy: &PolicyInput) -> Result<DeclineDecision, PolicyError> {
        self.evaluate(policy.start_date(), policy.drivers())
    }
}

/// Evaluates the decline rules against the system date
///
/// # Errors
///
/// Returns `PolicyError::NoDrivers` if `drivers` is empty.
pub fn evaluate_decline(
    start_date: NaiveDate,
    drivers: &[Driver],
) -> Result<DeclineDecision, PolicyError> {
    DeclineEvaluator::new().evaluate(start_date, drivers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::{Claim, Occupation};
    use core_kernel::FixedClock;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn evaluator() -> DeclineEvaluator<FixedClock> {
        DeclineEvaluator::with_clock(FixedClock::new(date(2024, 6, 1)))
    }

    #[test]
    fn test_accepts_ordinary_policy() {
        let drivers = vec![Driver::new("Ann", Occupation::Accountant, date(1990, 1, 1))];
        let decision = evaluator().evaluate(date(2024, 6, 1), &drivers).unwrap();

        assert_eq!(decision, DeclineDecision::Accepted);
        assert!(decision.reason_text().is_none());
    }

    #[test]
    fn test_start_date_wins_over_other_failures() {
        let drivers = vec![Driver::new("Kid", Occupation::Chauffeur, date(2015, 1, 1))];
        let decision = evaluator().evaluate(date(2024, 5, 31), &drivers).unwrap();

        assert_eq!(decision, DeclineDecision::Declined(DeclineReason::StartDateInPast));
    }

    #[test]
    fn test_reason_text() {
        let reason = DeclineReason::DriverHasTooManyClaims {
            driver_name: "Alice".to_string(),
        };
        assert_eq!(reason.to_string(), "Driver has more than 2 claims - Alice");
    }

    #[test]
    fn test_empty_drivers_rejected() {
        assert!(matches!(
            evaluator().evaluate(date(2024, 6, 1), &[]),
            Err(PolicyError::NoDrivers)
        ));
    }

    #[test]
    fn test_rule_order_is_fixed() {
        let names: Vec<&str> = DECLINE_RULES.iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            vec![
                "start_date_before_today",
                "youngest_driver_under_age",
                "oldest_driver_over_age",
                "policy_claims_exceed_limit",
                "driver_claims_exceed_limit",
            ]
        );
    }

    #[test]
    fn test_claims_checked_after_ages() {
        let claims = vec![Claim::new(date(2020, 1, 1)); 4];
        let drivers = vec![
            Driver::new("Elder", Occupation::Chauffeur, date(1940, 1, 1)).with_claims(claims),
        ];
        let decision = evaluator().evaluate(date(2024, 6, 1), &drivers).unwrap();

        assert_eq!(
            decision.reason_text().as_deref(),
            Some("Age of Oldest Driver - Elder")
        );
    }
}
