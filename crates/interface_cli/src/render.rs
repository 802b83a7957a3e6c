//! Quote result rendering

use std::io::Write;

use domain_policy::QuoteOutcome;

use crate::config::OutputFormat;
use crate::dto::QuoteResponse;
use crate::error::CliError;

/// Writes a quote outcome in the requested format
pub fn render_outcome<W: Write>(
    outcome: &QuoteOutcome,
    format: OutputFormat,
    out: &mut W,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Text => render_text(outcome, out),
        OutputFormat::Json => render_json(outcome, out),
    }
}

fn render_text<W: Write>(outcome: &QuoteOutcome, out: &mut W) -> Result<(), CliError> {
    match outcome {
        QuoteOutcome::Declined { reason } => {
            writeln!(out, "The policy has been declined for the following reason.")?;
            writeln!(out, "Reason: {}", reason)?;
        }
        QuoteOutcome::Quoted { premium } => {
            writeln!(out, "Your insurance premium will be : £{}", premium)?;
        }
    }
    Ok(())
}

fn render_json<W: Write>(outcome: &QuoteOutcome, out: &mut W) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *out, &QuoteResponse::from(outcome))?;
    writeln!(out)?;
    Ok(())
}
