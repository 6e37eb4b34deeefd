//! # statusctl
//!
//! Command-line harness for `status-core`.
//!
//! - `cli` - clap command tree and command implementations
//! - `plan` - TOML plan files and first-error accumulation
//! - `error` - errors of the tool itself

pub mod cli;
pub mod error;
pub mod plan;

pub use error::CliError;
pub use plan::{Plan, PlanOutcome, Step};
