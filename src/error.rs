//! Error types for the harucal crate.
//!
//! Deliberately small: malformed event data never raises an error here
//! (it propagates as an invalid-instant sentinel instead), so the only
//! fallible surface is parsing a view name supplied by the caller.

use thiserror::Error;

/// Returned when a string is neither `"week"` nor `"month"`.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("Unknown calendar view: '{0}'. Expected 'week' or 'month'")]
pub struct ParseViewError(pub String);
