//! Quote Service Tests
//!
//! End-to-end tests for `QuoteService`: decline rules first, premium
//! only for accepted policies.
//!
//! # Test Organization
//!
//! - `quoting` - Worked quote scenarios
//! - `outcome` - QuoteOutcome accessors and serialization
//! - `input_validation` - PolicyInput boundary checks

use chrono::Duration;
use core_kernel::FixedClock;
use domain_policy::{
    Claim, DeclineReason, Driver, Occupation, PolicyError, PolicyInput, Premium, QuoteOutcome,
    QuoteService,
};
use test_utils::{
    assert_quoted_at, DriverFixtures, TemporalFixtures, TestDriverBuilder, TestPolicyBuilder,
};

fn service() -> QuoteService<FixedClock> {
    QuoteService::with_clock(TemporalFixtures::clock())
}

// ============================================================================
// QUOTING TESTS
// ============================================================================

mod quoting {
    use super::*;

    #[test]
    fn test_accountant_aged_30_without_claims() {
        let policy = TestPolicyBuilder::new()
            .with_driver(DriverFixtures::accountant_aged_30())
            .build();

        // 500 -> 450 (accountant) -> 405 (youngest aged 26-75)
        assert_quoted_at(&service().quote(&policy).unwrap(), 405);
    }

    #[test]
    fn test_chauffeur_aged_22_with_recent_claim() {
        let driver = DriverFixtures::chauffeur_aged_22().with_claims([DriverFixtures::recent_claim()]);
        let policy = TestPolicyBuilder::new().with_driver(driver).build();

        // 500 -> 550 -> 660 -> 792
        assert_quoted_at(&service().quote(&policy).unwrap(), 792);
    }

    #[test]
    fn test_past_start_date_declines_without_pricing() {
        let policy = TestPolicyBuilder::new()
            .with_start_date(TemporalFixtures::yesterday())
            .with_driver(DriverFixtures::accountant_aged_30())
            .build();

        let outcome = service().quote(&policy).unwrap();
        assert_eq!(
            outcome,
            QuoteOutcome::Declined {
                reason: DeclineReason::StartDateInPast
            }
        );
    }

    #[test]
    fn test_driver_with_three_claims_declines_by_name() {
        let today = TemporalFixtures::today();
        let policy = TestPolicyBuilder::new()
            .with_driver_from(
                TestDriverBuilder::new()
                    .with_name("Alice")
                    .aged(40)
                    .with_claims_on(3, today),
            )
            .build();

        let outcome = service().quote(&policy).unwrap();
        let reason = outcome.decline_reason().expect("should be declined");
        assert!(reason.to_string().contains("Alice"));
    }

    #[test]
    fn test_future_start_date_is_quoted() {
        let start = TemporalFixtures::today() + Duration::days(60);
        let policy = TestPolicyBuilder::new()
            .with_start_date(start)
            .with_driver_from(
                TestDriverBuilder::new()
                    .with_occupation(Occupation::Accountant)
                    .aged_on(40, start),
            )
            .build();

        assert_quoted_at(&service().quote(&policy).unwrap(), 405);
    }

    #[test]
    fn test_five_drivers_are_quoted() {
        let mut builder = TestPolicyBuilder::new();
        for age in [30, 35, 40, 45, 50] {
            builder = builder.with_driver_from(
                TestDriverBuilder::new()
                    .with_occupation(Occupation::Chauffeur)
                    .aged(age),
            );
        }

        // 500 -> 550 -> 495
        assert_quoted_at(&service().quote(&builder.build()).unwrap(), 495);
    }
}

// ============================================================================
// OUTCOME TESTS
// ============================================================================

mod outcome {
    use super::*;

    #[test]
    fn test_quoted_accessors() {
        let outcome = QuoteOutcome::Quoted {
            premium: Premium::new(792),
        };

        assert!(!outcome.is_declined());
        assert_eq!(outcome.premium(), Some(Premium::new(792)));
        assert!(outcome.decline_reason().is_none());
    }

    #[test]
    fn test_declined_accessors() {
        let outcome = QuoteOutcome::Declined {
            reason: DeclineReason::TooManyPolicyClaims,
        };

        assert!(outcome.is_declined());
        assert!(outcome.premium().is_none());
    }

    #[test]
    fn test_quoted_serializes_with_tag() {
        let outcome = QuoteOutcome::Quoted {
            premium: Premium::new(450),
        };
        let json = serde_json::to_value(&outcome).unwrap();

        assert_eq!(json["outcome"], "quoted");
        assert_eq!(json["premium"], 450);
    }

    #[test]
    fn test_declined_serializes_reason() {
        let outcome = QuoteOutcome::Declined {
            reason: DeclineReason::OldestDriverOverAge {
                driver_name: "Edna".to_string(),
            },
        };
        let json = serde_json::to_value(&outcome).unwrap();

        assert_eq!(json["outcome"], "declined");
        assert_eq!(json["reason"]["OldestDriverOverAge"]["driver_name"], "Edna");
    }
}

// ============================================================================
// INPUT VALIDATION TESTS
// ============================================================================

mod input_validation {
    use super::*;

    fn driver(name: &str) -> Driver {
        Driver::new(name, Occupation::Accountant, TemporalFixtures::date_of_birth_for_age(40, TemporalFixtures::today()))
    }

    #[test]
    fn test_empty_drivers_rejected() {
        let result = PolicyInput::new(TemporalFixtures::today(), Vec::new());
        assert!(matches!(result, Err(PolicyError::NoDrivers)));
    }

    #[test]
    fn test_six_drivers_rejected() {
        let drivers = (0..6).map(|i| driver(&format!("Driver {}", i))).collect();
        let result = PolicyInput::new(TemporalFixtures::today(), drivers);

        assert!(matches!(result, Err(PolicyError::Validation(_))));
    }

    #[test]
    fn test_five_drivers_accepted() {
        let drivers = (0..5).map(|i| driver(&format!("Driver {}", i))).collect();
        assert!(PolicyInput::new(TemporalFixtures::today(), drivers).is_ok());
    }

    #[test]
    fn test_empty_name_rejected() {
        let result = PolicyInput::new(TemporalFixtures::today(), vec![driver("")]);
        assert!(matches!(result, Err(PolicyError::Validation(_))));
    }

    #[test]
    fn test_six_claims_rejected() {
        let claims = vec![Claim::new(TemporalFixtures::today()); 6];
        let result = PolicyInput::new(
            TemporalFixtures::today(),
            vec![driver("Dave").with_claims(claims)],
        );

        assert!(matches!(result, Err(PolicyError::Validation(_))));
    }

    #[test]
    fn test_snapshot_preserves_order() {
        let policy = PolicyInput::new(
            TemporalFixtures::today(),
            vec![driver("First"), driver("Second")],
        )
        .unwrap();

        let names: Vec<&str> = policy.drivers().iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second"]);
        assert_eq!(policy.start_date(), TemporalFixtures::today());
    }
}
