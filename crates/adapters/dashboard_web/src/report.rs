//! Error rendering for console messages.

use std::error::Error;
use std::fmt::Debug;

/// Render an error with its whole source chain (`outer: inner: root`).
pub fn describe(err: &dyn Error) -> String {
    let mut text = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        text.push_str(": ");
        text.push_str(&cause.to_string());
        source = cause.source();
    }
    text
}

/// Log a failed DOM call at debug level and return the logged message.
///
/// A failure never interrupts the caller.
pub fn dom_failure<E: Debug>(action: &str, result: Result<(), E>) -> Option<String> {
    let err = result.err()?;
    let message = format!("failed to {action}: {err:?}");
    log::debug!("{message}");
    Some(message)
}
