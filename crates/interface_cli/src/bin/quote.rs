//! Motor Quote - Command-line binary
//!
//! # Usage
//!
//! ```bash
//! # Answer the questions interactively
//! cargo run --bin motor-quote
//!
//! # Quote a policy file and print JSON
//! QUOTE_INPUT_FILE=policy.json QUOTE_OUTPUT=json cargo run --bin motor-quote
//! ```
//!
//! # Environment Variables
//!
//! * `QUOTE_LOG_LEVEL` - Log level when `RUST_LOG` is unset (default: warn)
//! * `QUOTE_OUTPUT` - `text` or `json` (default: text)
//! * `QUOTE_INPUT_FILE` - JSON policy file; skips the questions
//! * `QUOTE_AS_OF` - Treat this `DD/MM/YYYY` date as today

use std::io;

use anyhow::Context;
use interface_cli::{run, CliConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = CliConfig::from_env().context("failed to load QUOTE_* configuration")?;
    init_tracing(&config.log_level);

    tracing::debug!(?config, "Starting motor quote");

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&config, stdin.lock(), stdout.lock())?;

    Ok(())
}

/// Initializes the tracing subscriber, writing to stderr
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr).with_target(true))
        .init();
}
