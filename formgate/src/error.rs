//! Gate error types.

use thiserror::Error;

/// Errors returned by registration and validation entry points.
///
/// A failed check is not an error: a field failing presence or format is a
/// normal state surfaced through its indicator, never thrown or retried.
#[derive(Debug, Clone, Error)]
pub enum GateError {
    /// A field with this name is already tracked.
    #[error("field '{0}' is already registered")]
    DuplicateField(String),

    /// No tracked field has this name.
    #[error("no tracked field named '{0}'")]
    UnknownField(String),

    /// A format check pattern failed to compile.
    #[error("invalid format pattern: {0}")]
    Pattern(#[from] regex::Error),
}
