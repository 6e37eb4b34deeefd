//! # status-core
//!
//! A single-value error status: a classification [`Code`] plus a message.
//!
//! Fallible operations report their outcome as a [`Status`] instead of
//! unwinding. Callers inspect [`Status::ok`], merge several outcomes with
//! [`Status::update`] (the first error wins) or declare a failure impossible
//! with [`check_ok!`].
//!
//! ## Architectural Constraints
//!
//! - Plain value type: no shared mutable state, no globals
//! - OK always carries an empty message
//! - No async, no I/O except the fatal-check diagnostic
//!
//! ```
//! use status_core::{Code, Status};
//!
//! let mut overall = Status::OK;
//! overall.update(&Status::new(Code::Cancelled, "message"));
//! overall.update(&Status::new(Code::Unimplemented, "other"));
//! assert_eq!(overall.to_string(), "2:message");
//! ```

// =============================================================================
// MODULES
// =============================================================================

pub mod check;
pub mod code;
pub mod error;
pub mod status;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use check::{check_ok, check_ok_with};
pub use code::Code;
pub use error::StatusError;
pub use status::Status;
