//! # statusctl CLI Module
//!
//! ## Available Commands
//!
//! - `render` - Print the rendering of a status
//! - `check` - Run the fatal-check assertion on a status
//! - `run` - Accumulate the outcomes of a TOML plan
//! - `codes` - List every classification code

mod commands;

use crate::error::CliError;
use clap::{Parser, Subcommand};
use status_core::Status;
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// statusctl - render, check and accumulate status values
#[derive(Parser, Debug)]
#[command(name = "statusctl")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the textual rendering of a status
    Render {
        /// Code name (e.g. CANCELLED) or numeric value
        #[arg(short, long)]
        code: String,

        /// Error message (dropped for OK)
        #[arg(short, long, default_value = "")]
        message: String,
    },

    /// Abort the process unless the status is OK
    Check {
        /// Code name (e.g. UNKNOWN) or numeric value
        #[arg(short, long)]
        code: String,

        /// Error message (dropped for OK)
        #[arg(short, long, default_value = "")]
        message: String,

        /// Extra context appended to the failure diagnostic
        #[arg(long)]
        context: Option<String>,
    },

    /// Accumulate the outcomes of a plan file (first error wins)
    Run {
        /// Path to the TOML plan
        #[arg(short, long)]
        plan: PathBuf,

        /// Abort through the fatal check if the plan fails
        #[arg(long)]
        fatal: bool,
    },

    /// List every classification code
    Codes,
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
///
/// Returns the status the command produced; a non-OK status is a normal
/// result, not a `CliError`.
pub fn execute(cli: Cli) -> Result<Status, CliError> {
    let json = cli.json;

    match cli.command {
        Commands::Render { code, message } => cmd_render(&code, &message, json),
        Commands::Check {
            code,
            message,
            context,
        } => cmd_check(&code, &message, context.as_deref(), json),
        Commands::Run { plan, fatal } => cmd_run(&plan, fatal, json),
        Commands::Codes => cmd_codes(json),
    }
}
