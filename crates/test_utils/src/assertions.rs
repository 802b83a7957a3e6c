//! Custom Test Assertions
//!
//! Provides assertion helpers for decline decisions and quote outcomes
//! that give more meaningful failure messages than standard assertions.

use domain_policy::{DeclineDecision, QuoteOutcome};

/// Asserts that a decision is a decline with exactly the given reason text
///
/// # Panics
///
/// Panics if the policy was accepted or the reason differs
pub fn assert_declined_with(decision: &DeclineDecision, expected_reason: &str) {
    match decision {
        DeclineDecision::Declined(reason) => assert_eq!(
            reason.to_string(),
            expected_reason,
            "Declined for an unexpected reason"
        ),
        DeclineDecision::Accepted => panic!(
            "Expected decline with reason '{}', but the policy was accepted",
            expected_reason
        ),
    }
}

/// Asserts that a decision accepts the policy
pub fn assert_accepted(decision: &DeclineDecision) {
    if let DeclineDecision::Declined(reason) = decision {
        panic!("Expected policy to be accepted, but it was declined: {}", reason);
    }
}

/// Asserts that a quote was priced at exactly `expected`
pub fn assert_quoted_at(outcome: &QuoteOutcome, expected: u32) {
    match outcome {
        QuoteOutcome::Quoted { premium } => assert_eq!(
            premium.amount(),
            expected,
            "Premium differs: actual={}, expected={}",
            premium,
            expected
        ),
        QuoteOutcome::Declined { reason } => {
            panic!("Expected premium {}, but the policy was declined: {}", expected, reason)
        }
    }
}
