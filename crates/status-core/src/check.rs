//! # Fatal Check
//!
//! Assertions for code paths that must never fail.
//!
//! [`check_ok`] returns immediately for an OK status. For anything else it
//! emits a diagnostic containing the rendered status and aborts the process.
//! The diagnostic goes to the installed `tracing` subscriber when one accepts
//! error events, and straight to stderr otherwise. Abort does not unwind, so
//! the failure cannot be caught and resumed.
//!
//! Use this only where failure is a programming error. Recoverable failures
//! should be propagated with [`Status::into_result`] and `?`.
//!
//! ```no_run
//! use status_core::{Code, Status, check_ok};
//!
//! let status = Status::new(Code::Unknown, "Status Unknown");
//! check_ok!(status, "while opening {}", "input.mp4");
//! ```

use crate::status::Status;
use std::io::Write;
use std::panic::Location;
use tracing::Level;

/// Abort the process unless `status` is OK.
#[track_caller]
#[inline]
pub fn check_ok(status: &Status) {
    if !status.ok() {
        fail(Location::caller(), status, None);
    }
}

/// Like [`check_ok`], with extra context appended to the diagnostic.
///
/// `context` is only called when the check fails.
#[track_caller]
#[inline]
pub fn check_ok_with<F>(status: &Status, context: F)
where
    F: FnOnce() -> String,
{
    if !status.ok() {
        fail(Location::caller(), status, Some(context()));
    }
}

/// Macro form of [`check_ok`] / [`check_ok_with`].
///
/// Extra arguments are `format!` arguments and are evaluated only on failure.
#[macro_export]
macro_rules! check_ok {
    ($status:expr $(,)?) => {
        $crate::check_ok(&$status)
    };
    ($status:expr, $($arg:tt)+) => {
        $crate::check_ok_with(&$status, || ::std::format!($($arg)+))
    };
}

/// Build the diagnostic line for a failed check.
pub(crate) fn diagnostic(
    location: &Location<'_>,
    status: &Status,
    context: Option<&str>,
) -> String {
    let mut line = format!(
        "Check failed: {}:{}: {}",
        location.file(),
        location.line(),
        status
    );
    if let Some(context) = context.filter(|c| !c.is_empty()) {
        line.push(' ');
        line.push_str(context);
    }
    line
}

#[cold]
#[inline(never)]
fn fail(location: &Location<'_>, status: &Status, context: Option<String>) -> ! {
    let line = diagnostic(location, status, context.as_deref());

    if tracing::dispatcher::has_been_set() && tracing::enabled!(Level::ERROR) {
        tracing::error!(
            code = %status.error_code(),
            file = location.file(),
            line = location.line(),
            "{}",
            line
        );
    } else {
        let mut stderr = std::io::stderr().lock();
        let _ = writeln!(stderr, "{line}");
        let _ = stderr.flush();
    }

    std::process::abort()
}
