//! # Error Types
//!
//! Errors raised by the few fallible operations of this crate.
//!
//! These are not statuses. They report misuse of the crate's own API,
//! such as an unrecognised code name in a configuration file.

use thiserror::Error;

/// Errors that can occur when converting external input into crate types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatusError {
    /// The text does not name any known classification.
    #[error("Unknown status code: {0:?}")]
    UnknownCode(String),

    /// The numeric value does not correspond to any classification.
    #[error("Invalid status code value: {0}")]
    InvalidValue(i32),
}
