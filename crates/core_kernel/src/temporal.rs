//! Calendar date handling for quoting
//!
//! This module provides the date primitives shared by the rating rules:
//! - Age in whole years on a reference date
//! - Year shifting with leap-day clamping
//! - An injectable clock for "today"
//! - The `DD/MM/YYYY` text format used at the input boundary

use chrono::{Datelike, Local, Months, NaiveDate};
use thiserror::Error;

/// Text format for dates exchanged with users
pub const UK_DATE_FORMAT: &str = "%d/%m/%Y";

/// Errors related to temporal operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid date '{input}': expected DD/MM/YYYY")]
    InvalidFormat {
        input: String,
    },
}

/// Source of the current calendar date
///
/// Rules that depend on "today" take a clock rather than reading the
/// system time directly, so evaluation stays a function of its inputs.
pub trait Clock: Send + Sync {
    /// Returns the current calendar date
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the local system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a single date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl FixedClock {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

impl<C: Clock + ?Sized> Clock for std::sync::Arc<C> {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

/// Moves a date by whole years
///
/// 29 February maps to 28 February when the target year is not a leap
/// year. Results beyond chrono's supported range saturate at
/// `NaiveDate::MIN` / `NaiveDate::MAX`.
pub fn shift_years(date: NaiveDate, years: i32) -> NaiveDate {
    let months = Months::new(years.unsigned_abs().saturating_mul(12));
    if years >= 0 {
        date.checked_add_months(months).unwrap_or(NaiveDate::MAX)
    } else {
        date.checked_sub_months(months).unwrap_or(NaiveDate::MIN)
    }
}

/// Calculates the age in whole years of someone born on `date_of_birth`
/// as of `reference`
///
/// The age drops by one when the birthday has not yet come round in the
/// reference year. Birth dates on or after the reference year give 0.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use core_kernel::temporal::age_on_date;
///
/// let dob = NaiveDate::from_ymd_opt(2000, 6, 15).unwrap();
/// let day_before = NaiveDate::from_ymd_opt(2021, 6, 14).unwrap();
/// let birthday = NaiveDate::from_ymd_opt(2021, 6, 15).unwrap();
///
/// assert_eq!(age_on_date(dob, day_before), 20);
/// assert_eq!(age_on_date(dob, birthday), 21);
/// ```
pub fn age_on_date(date_of_birth: NaiveDate, reference: NaiveDate) -> u32 {
    let years = reference.year() - date_of_birth.year();
    if years <= 0 {
        return 0;
    }

    let anniversary = shift_years(date_of_birth, years);
    let age = if reference < anniversary { years - 1 } else { years };
    age.max(0) as u32
}

/// Parses a strict `DD/MM/YYYY` date
///
/// Surrounding whitespace is not accepted.
pub fn parse_uk_date(input: &str) -> Result<NaiveDate, TemporalError> {
    let invalid = || TemporalError::InvalidFormat {
        input: input.to_string(),
    };

    let bytes = input.as_bytes();
    if bytes.len() != 10 || bytes[2] != b'/' || bytes[5] != b'/' {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(input, UK_DATE_FORMAT).map_err(|_| invalid())
}

/// Formats a date as `DD/MM/YYYY`
pub fn format_uk_date(date: NaiveDate) -> String {
    date.format(UK_DATE_FORMAT).to_string()
}

/// Serde adapter for `DD/MM/YYYY` date fields
///
/// Use with `#[serde(with = "core_kernel::temporal::uk_date")]`.
pub mod uk_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_uk_date(*date))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        super::parse_uk_date(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_age_before_and_on_birthday() {
        let dob = date(1990, 3, 10);
        assert_eq!(age_on_date(dob, date(2020, 3, 9)), 29);
        assert_eq!(age_on_date(dob, date(2020, 3, 10)), 30);
    }

    #[test]
    fn test_age_clamps_to_zero() {
        assert_eq!(age_on_date(date(2030, 1, 1), date(2020, 1, 1)), 0);
        assert_eq!(age_on_date(date(2020, 5, 1), date(2020, 12, 1)), 0);
    }

    #[test]
    fn test_shift_years_leap_day() {
        assert_eq!(shift_years(date(2000, 2, 29), 1), date(2001, 2, 28));
        assert_eq!(shift_years(date(2024, 2, 29), -1), date(2023, 2, 28));
        assert_eq!(shift_years(date(2000, 2, 29), 4), date(2004, 2, 29));
    }

    #[test]
    fn test_fixed_clock() {
        let clock = FixedClock::new(date(2024, 1, 1));
        assert_eq!(clock.today(), date(2024, 1, 1));
    }

    #[test]
    fn test_parse_uk_date() {
        assert_eq!(parse_uk_date("06/10/2015").unwrap(), date(2015, 10, 6));
        assert!(parse_uk_date("6/10/2015").is_err());
        assert!(parse_uk_date("2015-10-06").is_err());
        assert!(parse_uk_date("31/02/2015").is_err());
    }
}
