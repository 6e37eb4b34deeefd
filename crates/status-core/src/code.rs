//! # Error Classification Codes
//!
//! The fixed set of error kinds a [`Status`](crate::Status) can carry.
//!
//! Every code has a stable numeric value and a stable symbolic text.
//! The numeric value is what appears in a rendered status (`"2:msg"`); the
//! symbolic text is the `Display` form of the code itself.
//!
//! Codes are compared for equality only. No ordering is defined between
//! classifications, so `Code` deliberately does not implement `Ord`.

use crate::error::StatusError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// CODE ENUM
// =============================================================================

/// Error classification.
///
/// `Ok` is the success classification; everything else is an error kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(i32)]
pub enum Code {
    /// Not an error; returned on success.
    #[default]
    Ok = 0,
    /// Unknown or generic failure.
    Unknown = 1,
    /// The operation was cancelled, typically by the caller.
    Cancelled = 2,
    /// The caller specified an invalid argument.
    InvalidArgument = 3,
    /// The operation is not implemented or not supported.
    Unimplemented = 4,
    /// Cannot open file.
    FileFailure = 5,
    /// End of stream reached.
    EndOfStream = 6,
    /// Failure to get an HTTP response successfully.
    HttpFailure = 7,
    /// Unable to parse the media file.
    ParserFailure = 8,
    /// Failed to do the encryption.
    EncryptionFailure = 9,
    /// Error when trying to do chunking.
    ChunkingError = 10,
    /// Fail to mux the media file.
    MuxerFailure = 11,
    /// This track fragment is finalized.
    FragmentFinalized = 12,
    /// Server errors. Receiving malformed data from the server.
    ServerError = 13,
    /// Internal invariant violated.
    InternalError = 14,
    /// The operation was stopped.
    Stopped = 15,
    /// The operation timed out.
    TimeOut = 16,
    /// A requested value was not found.
    NotFound = 17,
    /// The entity the caller tried to create already exists.
    AlreadyExists = 18,
}

impl Code {
    /// Every classification, in numeric order.
    pub const ALL: [Code; 19] = [
        Code::Ok,
        Code::Unknown,
        Code::Cancelled,
        Code::InvalidArgument,
        Code::Unimplemented,
        Code::FileFailure,
        Code::EndOfStream,
        Code::HttpFailure,
        Code::ParserFailure,
        Code::EncryptionFailure,
        Code::ChunkingError,
        Code::MuxerFailure,
        Code::FragmentFinalized,
        Code::ServerError,
        Code::InternalError,
        Code::Stopped,
        Code::TimeOut,
        Code::NotFound,
        Code::AlreadyExists,
    ];

    /// Stable numeric value of this code.
    #[must_use]
    pub const fn value(self) -> i32 {
        self as i32
    }

    /// Look up a code by its numeric value.
    pub fn from_value(value: i32) -> Result<Self, StatusError> {
        Self::ALL
            .iter()
            .copied()
            .find(|code| code.value() == value)
            .ok_or(StatusError::InvalidValue(value))
    }

    /// Symbolic text of this code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Code::Ok => "OK",
            Code::Unknown => "UNKNOWN",
            Code::Cancelled => "CANCELLED",
            Code::InvalidArgument => "INVALID_ARGUMENT",
            Code::Unimplemented => "UNIMPLEMENTED",
            Code::FileFailure => "FILE_FAILURE",
            Code::EndOfStream => "END_OF_STREAM",
            Code::HttpFailure => "HTTP_FAILURE",
            Code::ParserFailure => "PARSER_FAILURE",
            Code::EncryptionFailure => "ENCRYPTION_FAILURE",
            Code::ChunkingError => "CHUNKING_ERROR",
            Code::MuxerFailure => "MUXER_FAILURE",
            Code::FragmentFinalized => "FRAGMENT_FINALIZED",
            Code::ServerError => "SERVER_ERROR",
            Code::InternalError => "INTERNAL_ERROR",
            Code::Stopped => "STOPPED",
            Code::TimeOut => "TIME_OUT",
            Code::NotFound => "NOT_FOUND",
            Code::AlreadyExists => "ALREADY_EXISTS",
        }
    }

    /// True for the success classification.
    #[must_use]
    pub const fn is_ok(self) -> bool {
        matches!(self, Code::Ok)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses either the symbolic text (case-insensitive) or the numeric value.
impl FromStr for Code {
    type Err = StatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        if let Ok(value) = trimmed.parse::<i32>() {
            return Self::from_value(value);
        }

        Self::ALL
            .iter()
            .copied()
            .find(|code| code.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| StatusError::UnknownCode(s.to_string()))
    }
}

impl TryFrom<i32> for Code {
    type Error = StatusError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

impl From<Code> for i32 {
    fn from(code: Code) -> Self {
        code.value()
    }
}

// =============================================================================
// TESTS
// =============================================================================
