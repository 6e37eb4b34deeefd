//! # CLI Errors
//!
//! Failures of statusctl itself (unreadable plan, bad code name, ...).
//! A failing *status* is not a `CliError`; it is a normal command result.

use status_core::StatusError;
use thiserror::Error;

/// Errors that abort a statusctl command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading an input file failed.
    #[error("I/O error on '{path}': {source}")]
    Io {
        /// File being accessed.
        path: String,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The plan file is not valid TOML or has the wrong shape.
    #[error("Invalid plan: {0}")]
    Config(String),

    /// A plan step names an unknown code.
    #[error("Invalid code in step '{name}': {source}")]
    Step {
        /// Step name from the plan.
        name: String,
        /// Underlying parse error.
        #[source]
        source: StatusError,
    },

    /// A code name or value could not be parsed.
    #[error(transparent)]
    Code(#[from] StatusError),

    /// JSON output could not be produced.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<toml::de::Error> for CliError {
    fn from(e: toml::de::Error) -> Self {
        CliError::Config(e.to_string())
    }
}
