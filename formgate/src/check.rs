//! Pass/fail predicates over a field's current text value.

use regex::Regex;

use crate::error::GateError;

/// A single pass/fail predicate with an associated failure message.
///
/// Checks are attached to a field in declaration order and short-circuit:
/// the first failing check determines the message reported for the field.
#[derive(Debug, Clone)]
pub enum Check {
    /// Value must contain at least one non-whitespace character.
    Presence {
        /// Message reported when the value is empty or whitespace.
        failure_message: String,
    },
    /// Value must match a regular expression.
    Format {
        /// Compiled pattern. Matching uses substring search; a pattern that
        /// must cover the whole value carries its own anchors.
        pattern: Regex,
        /// Message reported when the pattern does not match.
        failure_message: String,
    },
    /// Value must be a well-formed email address.
    ///
    /// An empty value passes; pair with [`Check::presence`] to also require
    /// one.
    Email {
        /// Message reported when the value does not parse as an address.
        failure_message: String,
    },
}

impl Check {
    /// Presence check.
    pub fn presence(failure_message: impl Into<String>) -> Self {
        Self::Presence {
            failure_message: failure_message.into(),
        }
    }

    /// Format check over a regular expression in source form.
    pub fn format(
        pattern: &str,
        failure_message: impl Into<String>,
    ) -> Result<Self, GateError> {
        Ok(Self::Format {
            pattern: Regex::new(pattern)?,
            failure_message: failure_message.into(),
        })
    }

    /// Email check.
    pub fn email(failure_message: impl Into<String>) -> Self {
        Self::Email {
            failure_message: failure_message.into(),
        }
    }

    /// Run the predicate against a value.
    ///
    /// A failed check returns its failure message.
    pub fn run<'a>(&'a self, value: &str) -> Result<(), &'a str> {
        match self {
            Self::Presence { failure_message } => {
                if value.trim().is_empty() {
                    Err(failure_message)
                } else {
                    Ok(())
                }
            }
            Self::Format {
                pattern,
                failure_message,
            } => {
                if pattern.is_match(value) {
                    Ok(())
                } else {
                    Err(failure_message)
                }
            }
            Self::Email { failure_message } => {
                if value.is_empty() || email_address::EmailAddress::is_valid(value) {
                    Ok(())
                } else {
                    Err(failure_message)
                }
            }
        }
    }

    /// The message reported when this check fails.
    pub fn failure_message(&self) -> &str {
        match self {
            Self::Presence { failure_message }
            | Self::Format {
                failure_message, ..
            }
            | Self::Email { failure_message } => failure_message,
        }
    }
}
