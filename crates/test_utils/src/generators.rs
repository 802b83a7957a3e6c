//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating drivers and policies
//! that satisfy the input-boundary invariants (1-5 drivers, 0-5 claims
//! each, non-empty names).

use chrono::{Duration, NaiveDate};
use domain_policy::{Claim, Driver, Occupation, MAX_CLAIMS_PER_DRIVER, MAX_DRIVERS};
use proptest::prelude::*;

use crate::fixtures::TemporalFixtures;

/// Strategy for generating occupations
pub fn occupation_strategy() -> impl Strategy<Value = Occupation> {
    prop_oneof![Just(Occupation::Chauffeur), Just(Occupation::Accountant)]
}

/// Strategy for generating non-empty driver names
pub fn driver_name_strategy() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{1,12}"
}

/// Strategy for generating a date within `days` days before `anchor`
pub fn date_before_strategy(anchor: NaiveDate, days: i64) -> impl Strategy<Value = NaiveDate> {
    (0..=days).prop_map(move |offset| anchor - Duration::days(offset))
}

/// Strategy for generating a date of birth for someone aged roughly
/// 0 to 100 on today's fixture date
pub fn date_of_birth_strategy() -> impl Strategy<Value = NaiveDate> {
    date_before_strategy(TemporalFixtures::today(), 100 * 366)
}

/// Strategy for generating a claim in the ten years before today
pub fn claim_strategy() -> impl Strategy<Value = Claim> {
    date_before_strategy(TemporalFixtures::today(), 10 * 366).prop_map(Claim::new)
}

/// Strategy for generating a driver with 0-5 claims
pub fn driver_strategy() -> impl Strategy<Value = Driver> {
    (
        driver_name_strategy(),
        occupation_strategy(),
        date_of_birth_strategy(),
        prop::collection::vec(claim_strategy(), 0..=MAX_CLAIMS_PER_DRIVER),
    )
        .prop_map(|(name, occupation, date_of_birth, claims)| {
            Driver::new(name, occupation, date_of_birth).with_claims(claims)
        })
}

/// Strategy for generating a valid driver list (1-5 drivers)
pub fn drivers_strategy() -> impl Strategy<Value = Vec<Driver>> {
    prop::collection::vec(driver_strategy(), 1..=MAX_DRIVERS)
}
