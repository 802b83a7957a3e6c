//! Policy domain services
//!
//! This module contains the quoting service, which runs the decline
//! rules and, for accepted policies only, the premium pipeline.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use core_kernel::{Clock, SystemClock};

use crate::decline::{DeclineDecision, DeclineEvaluator, DeclineReason};
use crate::driver::PolicyInput;
use crate::error::PolicyError;
use crate::premium::{Premium, PremiumCalculator};

/// Result of quoting a policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum QuoteOutcome {
    /// The policy was rejected before pricing
    Declined { reason: DeclineReason },
    /// The policy was accepted and priced
    Quoted { premium: Premium },
}

impl QuoteOutcome {
    pub fn is_declined(&self) -> bool {
        matches!(self, QuoteOutcome::Declined { .. })
    }

    pub fn premium(&self) -> Option<Premium> {
        match self {
            QuoteOutcome::Quoted { premium } => Some(*premium),
            QuoteOutcome::Declined { .. } => None,
        }
    }

    pub fn decline_reason(&self) -> Option<&DeclineReason> {
        match self {
            QuoteOutcome::Declined { reason } => Some(reason),
            QuoteOutcome::Quoted { .. } => None,
        }
    }
}

/// Service for quoting motor policies
///
/// Decline rules always run first; the premium is only calculated when
/// the policy is accepted.
///
/// # Example
///
/// ```rust,ignore
/// let service = QuoteService::new();
/// match service.quote(&policy)? {
///     QuoteOutcome::Declined { reason } => println!("Reason: {}", reason),
///     QuoteOutcome::Quoted { premium } => println!("Premium: {}", premium),
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct QuoteService<C = SystemClock> {
    decline: DeclineEvaluator<C>,
    pricing: PremiumCalculator,
}

impl QuoteService<SystemClock> {
    /// Creates a quote service reading the system date
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl<C: Clock> QuoteService<C> {
    /// Creates a quote service with an explicit clock
    pub fn with_clock(clock: C) -> Self {
        Self {
            decline: DeclineEvaluator::with_clock(clock),
            pricing: PremiumCalculator::new(),
        }
    }

    /// Quotes a validated policy
    ///
    /// # Errors
    ///
    /// Returns `PolicyError::NoDrivers` if the policy has no drivers.
    #[instrument(skip(self, policy), fields(start_date = %policy.start_date(), drivers = policy.drivers().len()))]
    pub fn quote(&self, policy: &PolicyInput) -> Result<QuoteOutcome, PolicyError> {
        match self.decline.evaluate_policy(policy)? {
            DeclineDecision::Declined(reason) => Ok(QuoteOutcome::Declined { reason }),
            DeclineDecision::Accepted => {
                let premium = self.pricing.calculate_policy(policy)?;
                Ok(QuoteOutcome::Quoted { premium })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::{Driver, Occupation};
    use chrono::NaiveDate;
    use core_kernel::FixedClock;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_declined_policy_is_not_priced() {
        let service = QuoteService::with_clock(FixedClock::new(date(2024, 6, 1)));
        let policy = PolicyInput::new(
            date(2024, 1, 1),
            vec![Driver::new("Ann", Occupation::Accountant, date(1990, 1, 1))],
        )
        .unwrap();

        let outcome = service.quote(&policy).unwrap();
        assert!(outcome.is_declined());
        assert!(outcome.premium().is_none());
    }

    #[test]
    fn test_accepted_policy_is_priced() {
        let service = QuoteService::with_clock(FixedClock::new(date(2024, 6, 1)));
        let policy = PolicyInput::new(
            date(2024, 6, 1),
            vec![Driver::new("Ann", Occupation::Accountant, date(1990, 1, 1))],
        )
        .unwrap();

        let outcome = service.quote(&policy).unwrap();
        // 500 -10% accountant = 450, -10% age 34 = 405
        assert_eq!(outcome.premium(), Some(Premium::new(405)));
    }
}
