//! # Plan Runner
//!
//! A plan is a TOML list of named steps, each with a pre-recorded outcome.
//! Running a plan folds every outcome into one status with
//! [`Status::update`], so the first failing step decides the result.
//!
//! ```toml
//! [[step]]
//! name = "open input"
//! code = "OK"
//!
//! [[step]]
//! name = "parse header"
//! code = "PARSER_FAILURE"
//! message = "bad box size"
//! ```

use crate::error::CliError;
use serde::Deserialize;
use status_core::{Code, Status};
use std::path::Path;

// =============================================================================
// CONFIGURATION
// =============================================================================

/// Parsed plan file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Plan {
    /// Steps in execution order.
    #[serde(default, rename = "step")]
    pub steps: Vec<Step>,
}

/// One step of a plan.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Step {
    /// Human-readable step name, reported when the step fails first.
    pub name: String,
    /// Code name (`"PARSER_FAILURE"`, case-insensitive) or numeric value.
    pub code: String,
    /// Message; ignored for OK steps.
    #[serde(default)]
    pub message: String,
}

impl Step {
    /// The outcome this step reports.
    pub fn status(&self) -> Result<Status, CliError> {
        let code: Code = self.code.parse().map_err(|source| CliError::Step {
            name: self.name.clone(),
            source,
        })?;
        Ok(Status::new(code, self.message.as_str()))
    }
}

impl Plan {
    /// Parse a plan from TOML text and validate every step's code.
    pub fn from_toml_str(text: &str) -> Result<Self, CliError> {
        let plan: Plan = toml::from_str(text)?;
        for step in &plan.steps {
            step.status()?;
        }
        Ok(plan)
    }

    /// Read and parse a plan file.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let text = std::fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Fold all step outcomes, first error wins.
    pub fn run(&self) -> Result<PlanOutcome, CliError> {
        let mut outcome = PlanOutcome::default();

        for step in &self.steps {
            let status = step.status()?;
            tracing::debug!(step = %step.name, status = %status, "Step finished");

            if outcome.status.ok() && !status.ok() {
                outcome.failed_step = Some(step.name.clone());
            }
            outcome.status.update(&status);
            outcome.steps_run += 1;
        }

        Ok(outcome)
    }
}

// =============================================================================
// OUTCOME
// =============================================================================

/// Result of running a plan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanOutcome {
    /// Accumulated status.
    pub status: Status,
    /// Name of the step that produced `status`, if it is an error.
    pub failed_step: Option<String>,
    /// Number of steps evaluated.
    pub steps_run: usize,
}
