//! Test Data Builders
//!
//! Provides builder patterns for constructing drivers and policies with
//! sensible defaults. Tests specify only the fields they care about.

use chrono::NaiveDate;
use domain_policy::{Claim, Driver, Occupation, PolicyInput};
use fake::faker::name::en::Name;
use fake::Fake;

use crate::fixtures::TemporalFixtures;

/// Builder for constructing test drivers
///
/// Defaults to a 40-year-old accountant with a generated name and no
/// claims.
pub struct TestDriverBuilder {
    name: String,
    occupation: Occupation,
    date_of_birth: NaiveDate,
    claims: Vec<Claim>,
}

impl Default for TestDriverBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestDriverBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            name: Name().fake(),
            occupation: Occupation::Accountant,
            date_of_birth: TemporalFixtures::date_of_birth_for_age(40, TemporalFixtures::today()),
            claims: Vec::new(),
        }
    }

    /// Sets the name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the occupation
    pub fn with_occupation(mut self, occupation: Occupation) -> Self {
        self.occupation = occupation;
        self
    }

    /// Sets the date of birth
    pub fn with_date_of_birth(mut self, date_of_birth: NaiveDate) -> Self {
        self.date_of_birth = date_of_birth;
        self
    }

    /// Sets the date of birth so the driver is exactly `age` on `on`
    pub fn aged_on(mut self, age: u32, on: NaiveDate) -> Self {
        self.date_of_birth = TemporalFixtures::date_of_birth_for_age(age, on);
        self
    }

    /// Sets the date of birth so the driver is exactly `age` today
    pub fn aged(self, age: u32) -> Self {
        self.aged_on(age, TemporalFixtures::today())
    }

    /// Adds one claim on the given date
    pub fn with_claim_on(mut self, date: NaiveDate) -> Self {
        self.claims.push(Claim::new(date));
        self
    }

    /// Adds `count` claims, all on the given date
    pub fn with_claims_on(mut self, count: usize, date: NaiveDate) -> Self {
        self.claims.extend(std::iter::repeat(Claim::new(date)).take(count));
        self
    }

    /// Builds the driver
    pub fn build(self) -> Driver {
        Driver::new(self.name, self.occupation, self.date_of_birth).with_claims(self.claims)
    }
}

/// Builder for constructing test policies
///
/// Defaults to a policy starting today.
pub struct TestPolicyBuilder {
    start_date: NaiveDate,
    drivers: Vec<Driver>,
}

impl Default for TestPolicyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestPolicyBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            start_date: TemporalFixtures::today(),
            drivers: Vec::new(),
        }
    }

    /// Sets the policy start date
    pub fn with_start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = start_date;
        self
    }

    /// Adds a driver
    pub fn with_driver(mut self, driver: Driver) -> Self {
        self.drivers.push(driver);
        self
    }

    /// Adds a driver built from a driver builder
    pub fn with_driver_from(self, builder: TestDriverBuilder) -> Self {
        self.with_driver(builder.build())
    }

    /// Returns the raw parts without validation
    pub fn build_parts(self) -> (NaiveDate, Vec<Driver>) {
        (self.start_date, self.drivers)
    }

    /// Builds a validated policy snapshot
    ///
    /// # Panics
    ///
    /// Panics if the configured data fails policy validation
    pub fn build(self) -> PolicyInput {
        PolicyInput::new(self.start_date, self.drivers).expect("test policy should be valid")
    }
}
