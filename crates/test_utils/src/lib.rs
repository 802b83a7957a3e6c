//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! motor quoting test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built dates, clocks, and drivers
//! - `builders`: Builder patterns for drivers and policies
//! - `assertions`: Assertion helpers for decisions and quotes
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
