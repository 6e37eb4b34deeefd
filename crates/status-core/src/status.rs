//! # Status Value Type
//!
//! A [`Status`] is the outcome of a fallible operation: a [`Code`] plus a
//! human-readable message.
//!
//! ## Invariants
//!
//! - An OK status always carries an empty message. Any message supplied
//!   together with [`Code::Ok`] is discarded.
//! - A status is a plain value. Clones share nothing.
//!
//! ## Equality vs. Matching
//!
//! `==` compares code AND message. [`Status::matches`] compares the code only,
//! which is what tests want when the message text depends on the environment.
//!
//! ## Accumulation
//!
//! [`Status::update`] keeps the first error it sees. Running several fallible
//! steps through `update` reports the earliest failure and nothing can clear it
//! afterwards except an explicit [`Status::clear`].

use crate::code::Code;
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// STATUS
// =============================================================================

/// Error classification plus message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "StatusRepr")]
pub struct Status {
    code: Code,
    message: String,
}

/// Wire shape used when deserializing, so OK-normalization is re-applied.
#[derive(Deserialize)]
struct StatusRepr {
    code: Code,
    #[serde(default)]
    message: String,
}

impl From<StatusRepr> for Status {
    fn from(repr: StatusRepr) -> Self {
        Self::new(repr.code, repr.message)
    }
}

impl Status {
    /// The canonical success value.
    pub const OK: Status = Status {
        code: Code::Ok,
        message: String::new(),
    };

    /// Generic failure with no message.
    pub const UNKNOWN: Status = Status {
        code: Code::Unknown,
        message: String::new(),
    };

    /// Create a status. The message is dropped when `code` is [`Code::Ok`].
    #[must_use]
    pub fn new(code: Code, message: impl Into<String>) -> Self {
        let mut status = Self::OK;
        status.set_error(code, message);
        status
    }

    /// Create a status with an empty message.
    #[must_use]
    pub const fn with_code(code: Code) -> Self {
        Self {
            code,
            message: String::new(),
        }
    }

    /// True if this is a success status.
    #[must_use]
    pub const fn ok(&self) -> bool {
        self.code.is_ok()
    }

    /// The classification.
    #[must_use]
    pub const fn error_code(&self) -> Code {
        self.code
    }

    /// The message; always empty for an OK status.
    #[must_use]
    pub fn error_message(&self) -> &str {
        &self.message
    }

    /// Overwrite code and message in place.
    pub fn set_error(&mut self, code: Code, message: impl Into<String>) {
        self.code = code;
        if code.is_ok() {
            self.message.clear();
        } else {
            self.message = message.into();
        }
    }

    /// Reset to OK.
    pub fn clear(&mut self) {
        self.code = Code::Ok;
        self.message.clear();
    }

    /// Merge `other` into `self`: only an OK receiver takes on `other`.
    ///
    /// Once an error has been recorded it sticks, even against a later OK.
    pub fn update(&mut self, other: &Status) {
        if self.ok() {
            self.clone_from(other);
        }
    }

    /// Exchange state with `other`.
    pub fn swap(&mut self, other: &mut Status) {
        std::mem::swap(self, other);
    }

    /// Loose comparison: same code, message ignored.
    #[must_use]
    pub fn matches(&self, other: &Status) -> bool {
        self.code == other.code
    }

    /// `Ok(())` for an OK status, `Err(self)` otherwise.
    pub fn into_result(self) -> Result<(), Status> {
        if self.ok() { Ok(()) } else { Err(self) }
    }
}

// =============================================================================
// CONVERSIONS
// =============================================================================

impl From<Code> for Status {
    fn from(code: Code) -> Self {
        Self::with_code(code)
    }
}

impl From<Result<(), Status>> for Status {
    fn from(result: Result<(), Status>) -> Self {
        match result {
            Ok(()) => Self::OK,
            Err(status) => status,
        }
    }
}

/// Folds with [`Status::update`]: the first error in the sequence wins.
impl FromIterator<Status> for Status {
    fn from_iter<I: IntoIterator<Item = Status>>(iter: I) -> Self {
        let mut acc = Status::OK;
        for status in iter {
            if !acc.ok() {
                break;
            }
            acc.update(&status);
        }
        acc
    }
}

// =============================================================================
// RENDERING
// =============================================================================

/// `"OK"` on success, `"<numeric code>:<message>"` otherwise.
impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ok() {
            f.write_str("OK")
        } else {
            write!(f, "{}:{}", self.code.value(), self.message)
        }
    }
}

impl std::error::Error for Status {}

// =============================================================================
// TESTS
// =============================================================================
