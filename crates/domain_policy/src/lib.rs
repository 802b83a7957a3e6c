//! Motor Policy Rating Domain
//!
//! This crate implements the rating logic for motor insurance quotes.
//! It is infrastructure-agnostic: every operation is a pure function of
//! a policy snapshot and, for the start-date check, an injected clock.
//!
//! # Quote Flow
//!
//! ```text
//! PolicyInput -> DeclineEvaluator -> Declined(reason)
//!                                 \-> Accepted -> PremiumCalculator -> Premium
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_policy::{Driver, Occupation, PolicyInput, QuoteService};
//!
//! let driver = Driver::new("Alice", Occupation::Accountant, date_of_birth);
//! let policy = PolicyInput::new(start_date, vec![driver])?;
//!
//! let outcome = QuoteService::new().quote(&policy)?;
//! ```

pub mod driver;
pub mod decline;
pub mod premium;
pub mod error;
pub mod services;

pub use driver::{Claim, Driver, Occupation, PolicyInput, MAX_CLAIMS_PER_DRIVER, MAX_DRIVERS};
pub use decline::{evaluate_decline, DeclineDecision, DeclineEvaluator, DeclineReason};
pub use premium::{calculate_premium, Premium, PremiumCalculator, STARTING_POINT};
pub use error::PolicyError;
pub use services::{QuoteOutcome, QuoteService};
