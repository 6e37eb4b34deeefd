//! # CLI Command Implementations

use crate::error::CliError;
use crate::plan::Plan;
use serde::Serialize;
use status_core::{Code, Status, check_ok};
use std::path::Path;

// =============================================================================
// OUTPUT TYPES
// =============================================================================

/// JSON shape of a single status.
#[derive(Debug, Serialize)]
pub struct StatusJson {
    pub ok: bool,
    pub code: Code,
    pub value: i32,
    pub message: String,
    pub rendered: String,
}

impl From<&Status> for StatusJson {
    fn from(status: &Status) -> Self {
        Self {
            ok: status.ok(),
            code: status.error_code(),
            value: status.error_code().value(),
            message: status.error_message().to_string(),
            rendered: status.to_string(),
        }
    }
}

/// JSON shape of a plan run.
#[derive(Debug, Serialize)]
pub struct RunJson {
    pub status: StatusJson,
    pub failed_step: Option<String>,
    pub steps_run: usize,
}

/// JSON shape of one entry in the code listing.
#[derive(Debug, Serialize)]
pub struct CodeJson {
    pub name: &'static str,
    pub value: i32,
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

// =============================================================================
// RENDER COMMAND
// =============================================================================

/// Print the rendering of `(code, message)`.
pub fn cmd_render(code: &str, message: &str, json: bool) -> Result<Status, CliError> {
    let status = Status::new(code.parse()?, message);

    if json {
        print_json(&StatusJson::from(&status))?;
    } else {
        println!("{}", status);
    }

    // Rendering an error is not itself a failure.
    Ok(Status::OK)
}

// =============================================================================
// CHECK COMMAND
// =============================================================================

/// Run the fatal check. Does not return if the status is an error.
pub fn cmd_check(
    code: &str,
    message: &str,
    context: Option<&str>,
    json: bool,
) -> Result<Status, CliError> {
    let status = Status::new(code.parse()?, message);
    tracing::debug!(status = %status, "Checking status");

    match context {
        Some(context) => check_ok!(status, "{}", context),
        None => check_ok!(status),
    }

    if json {
        print_json(&StatusJson::from(&status))?;
    } else {
        println!("{}", status);
    }
    Ok(status)
}

// =============================================================================
// RUN COMMAND
// =============================================================================

/// Run a plan file and report the first failure.
pub fn cmd_run(path: &Path, fatal: bool, json: bool) -> Result<Status, CliError> {
    let plan = Plan::load(path)?;
    tracing::info!(plan = %path.display(), steps = plan.steps.len(), "Running plan");

    let outcome = plan.run()?;

    if json {
        print_json(&RunJson {
            status: StatusJson::from(&outcome.status),
            failed_step: outcome.failed_step.clone(),
            steps_run: outcome.steps_run,
        })?;
    } else {
        println!("{}", outcome.status);
        if let Some(step) = &outcome.failed_step {
            println!("First failure: {}", step);
        }
    }

    if fatal {
        let step = outcome.failed_step.as_deref().unwrap_or_default();
        check_ok!(outcome.status, "(first failing step: {})", step);
    }

    Ok(outcome.status)
}

// =============================================================================
// CODES COMMAND
// =============================================================================

/// List all codes with their numeric values.
pub fn cmd_codes(json: bool) -> Result<Status, CliError> {
    if json {
        let codes: Vec<CodeJson> = Code::ALL
            .iter()
            .map(|code| CodeJson {
                name: code.as_str(),
                value: code.value(),
            })
            .collect();
        print_json(&codes)?;
    } else {
        for code in Code::ALL {
            println!("{:>3}  {}", code.value(), code);
        }
    }
    Ok(Status::OK)
}
