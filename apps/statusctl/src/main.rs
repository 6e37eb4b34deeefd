//! # statusctl
//!
//! Render, check and accumulate status values from the command line.
//!
//! ## Usage
//!
//! ```bash
//! statusctl render --code CANCELLED --message "user abort"
//! statusctl check --code UNKNOWN --message "Status Unknown" --context Foo1234
//! statusctl run --plan steps.toml --fatal
//! statusctl --json codes
//! ```
//!
//! ## Exit Codes
//!
//! - `0` - command succeeded and produced an OK status
//! - `1` - statusctl itself failed (bad input, unreadable file)
//! - `2` - command produced an error status
//! - abort - a fatal check failed

use clap::Parser;
use statusctl::cli;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() -> ExitCode {
    let cli = cli::Cli::parse();

    init_tracing(cli.verbose);

    match cli::execute(cli) {
        Ok(status) if status.ok() => ExitCode::SUCCESS,
        Ok(status) => {
            tracing::warn!(status = %status, "Command produced an error status");
            ExitCode::from(2)
        }
        Err(e) => {
            tracing::error!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr. STATUSCTL_LOG_FORMAT=json enables machine-parseable output.
fn init_tracing(verbose: bool) {
    let log_format = std::env::var("STATUSCTL_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let default_filter = if verbose {
        "statusctl=debug,status_core=debug"
    } else {
        "statusctl=info,status_core=info"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_ansi(false),
                )
                .init();
        }
    }
}
