//! Interface CLI - Command-line frontend for motor quoting
//!
//! This crate wires the quoting domain to a terminal. It:
//! - Collects a policy interactively or from a JSON file
//! - Runs the decline rules and, when accepted, the premium pipeline
//! - Renders the outcome as text or JSON
//!
//! # Architecture
//!
//! ```text
//! stdin / policy file -> PolicyInput -> QuoteService -> QuoteOutcome -> stdout
//! ```
//!
//! Logging goes through `tracing`; the binary sends it to stderr so the
//! question and answer flow on stdout stays readable.

pub mod config;
pub mod dto;
pub mod error;
pub mod prompt;
pub mod render;

use std::io::{BufRead, Write};

use tracing::info;

use domain_policy::{PolicyInput, QuoteOutcome, QuoteService};

pub use config::{CliConfig, OutputFormat};
pub use dto::{load_policy_file, PolicyFile, QuoteResponse};
pub use error::CliError;
pub use prompt::InputCollector;
pub use render::render_outcome;

/// Runs one quote end to end
///
/// The policy comes from `config.input_file` when set; otherwise it is
/// collected by asking questions on `input` and `output`. The outcome is
/// written to `output` and returned.
pub fn run<R: BufRead, W: Write>(
    config: &CliConfig,
    input: R,
    mut output: W,
) -> Result<QuoteOutcome, CliError> {
    let policy = read_policy(config, input, &mut output)?;
    let service = QuoteService::with_clock(config.clock()?);

    let outcome = service.quote(&policy)?;
    info!(declined = outcome.is_declined(), "Quote complete");

    render_outcome(&outcome, config.output, &mut output)?;
    output.flush()?;
    Ok(outcome)
}

fn read_policy<R: BufRead, W: Write>(
    config: &CliConfig,
    input: R,
    output: &mut W,
) -> Result<PolicyInput, CliError> {
    match &config.input_file {
        Some(path) => load_policy_file(path),
        None => InputCollector::new(input, output).collect_policy(),
    }
}
