//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for quoting tests. Every date is
//! anchored to a fixed "today" so results do not depend on when the
//! suite runs.

use chrono::NaiveDate;
use core_kernel::{shift_years, FixedClock};
use domain_policy::{Claim, Driver, Occupation};

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// The date treated as "today" (1 June 2024)
    pub fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    /// A clock pinned to [`TemporalFixtures::today`]
    pub fn clock() -> FixedClock {
        FixedClock::new(Self::today())
    }

    /// The day before today
    pub fn yesterday() -> NaiveDate {
        Self::today().pred_opt().unwrap()
    }

    /// Date of birth giving exactly `age` on `on`
    pub fn date_of_birth_for_age(age: u32, on: NaiveDate) -> NaiveDate {
        shift_years(on, -(age as i32))
    }

    /// Date `months` calendar months before `date`
    pub fn months_before(date: NaiveDate, months: u32) -> NaiveDate {
        date.checked_sub_months(chrono::Months::new(months)).unwrap()
    }
}

/// Fixture for ready-made drivers, all rated as of today
pub struct DriverFixtures;

impl DriverFixtures {
    /// A 30-year-old accountant with no claims
    pub fn accountant_aged_30() -> Driver {
        Driver::new(
            "Alice",
            Occupation::Accountant,
            TemporalFixtures::date_of_birth_for_age(30, TemporalFixtures::today()),
        )
    }

    /// A 22-year-old chauffeur with no claims
    pub fn chauffeur_aged_22() -> Driver {
        Driver::new(
            "Bob",
            Occupation::Chauffeur,
            TemporalFixtures::date_of_birth_for_age(22, TemporalFixtures::today()),
        )
    }

    /// A claim dated three months before today
    pub fn recent_claim() -> Claim {
        Claim::new(TemporalFixtures::months_before(TemporalFixtures::today(), 3))
    }
}

/// Fixture for string test data
pub struct StringFixtures;

impl StringFixtures {
    /// Reason text for the start-date rule
    pub fn start_date_reason() -> &'static str {
        "Start Date of Policy"
    }

    /// Reason text for the youngest-driver rule
    pub fn youngest_driver_reason() -> &'static str {
        "Age of Youngest Driver"
    }

    /// Reason text for the policy claims rule
    pub fn policy_claims_reason() -> &'static str {
        "Policy has more than 3 claims."
    }
}
