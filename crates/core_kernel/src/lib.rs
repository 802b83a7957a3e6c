//! Core Kernel - Foundational types and utilities for motor quoting
//!
//! This crate provides the building blocks shared by the rating domain and
//! its frontends:
//! - Calendar arithmetic (age on a date, year shifting)
//! - The `Clock` abstraction isolating "today"
//! - The `DD/MM/YYYY` date text format
//! - `TemporalError` for date text that does not parse

pub mod temporal;

pub use temporal::{
    age_on_date, format_uk_date, parse_uk_date, shift_years,
    Clock, FixedClock, SystemClock, TemporalError,
};
