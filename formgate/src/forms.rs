//! Declarative field tables.
//!
//! Instead of registering fields one ad-hoc block at a time, a form is
//! described as a table of [`FieldSpec`] entries iterated once at setup.
//! Tables are serde-compatible, so a form can also be loaded from data.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::check::Check;
use crate::error::GateError;
use crate::field::{Field, FieldOptions};
use crate::gate::FormGate;
use crate::submit::SubmitControl;

/// Marker shown next to a failing field.
const CROSS: &str = "\u{2716}";

const DATE_PATTERN: &str = "(0[1-9]|1[0-2])/(0[1-9]|[1-2][0-9]|3[0-1])/[0-9]{4}";
const DATE_PATTERN_ANCHORED: &str = "^(0[1-9]|1[0-2])/(0[1-9]|[1-2][0-9]|3[0-1])/[0-9]{4}$";
const PRICE_PATTERN: &str = r"^[$]?[0-9]+([.]\d{2})?$";

/// Declarative form of a single check.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CheckSpec {
    /// Non-empty value.
    Presence {
        failure_message: String,
    },
    /// Value matches a regular expression (pattern in source form).
    Format {
        pattern: String,
        failure_message: String,
    },
    /// Well-formed email address.
    Email {
        failure_message: String,
    },
}

impl CheckSpec {
    /// Compile into a runnable check.
    pub fn build(&self) -> Result<Check, GateError> {
        match self {
            Self::Presence { failure_message } => Ok(Check::presence(failure_message.clone())),
            Self::Format {
                pattern,
                failure_message,
            } => Check::format(pattern, failure_message.clone()),
            Self::Email { failure_message } => Ok(Check::email(failure_message.clone())),
        }
    }
}

/// Declarative form of a field: name, ordered checks, display options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Stable field name.
    pub name: String,
    /// Checks in evaluation order.
    #[serde(default)]
    pub checks: Vec<CheckSpec>,
    /// Message shown when the field passes all checks.
    #[serde(default = "default_valid_message")]
    pub valid_message: String,
    /// Debounce between blur and validation, in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blur_wait_ms: Option<u64>,
}

fn default_valid_message() -> String {
    "\u{2714}".to_string()
}

impl FieldSpec {
    /// Describe a field with no checks.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            checks: Vec::new(),
            valid_message: default_valid_message(),
            blur_wait_ms: None,
        }
    }

    /// Append a check.
    pub fn check(mut self, check: CheckSpec) -> Self {
        self.checks.push(check);
        self
    }

    /// Set the blur debounce in milliseconds.
    pub fn blur_wait_ms(mut self, millis: u64) -> Self {
        self.blur_wait_ms = Some(millis);
        self
    }

    /// Build the tracked field, compiling every check in order.
    pub fn build(&self) -> Result<Field, GateError> {
        let field = Field::new(&self.name).with_options(FieldOptions {
            valid_message: self.valid_message.clone(),
            blur_wait: self.blur_wait_ms.map(Duration::from_millis),
        });
        for check in &self.checks {
            field.add_check(check.build()?);
        }
        Ok(field)
    }
}

/// Build and register every field in a table.
pub fn register_all<S: SubmitControl>(
    gate: &FormGate<S>,
    table: &[FieldSpec],
) -> Result<(), GateError> {
    for entry in table {
        gate.register(entry.build()?)?;
    }
    Ok(())
}

/// The event-details form: signup deadline and exchange date in MM/DD/YYYY,
/// a dollar price with optional cents, and a free-form location.
pub fn event_details() -> Vec<FieldSpec> {
    vec![
        FieldSpec::new("signup_deadline")
            .check(CheckSpec::Presence {
                failure_message: CROSS.into(),
            })
            .check(CheckSpec::Format {
                pattern: DATE_PATTERN.into(),
                failure_message: CROSS.into(),
            })
            .blur_wait_ms(300),
        FieldSpec::new("exchange_date")
            .check(CheckSpec::Presence {
                failure_message: CROSS.into(),
            })
            .check(CheckSpec::Format {
                pattern: DATE_PATTERN_ANCHORED.into(),
                failure_message: CROSS.into(),
            })
            .blur_wait_ms(300),
        FieldSpec::new("price")
            .check(CheckSpec::Presence {
                failure_message: CROSS.into(),
            })
            .check(CheckSpec::Format {
                pattern: PRICE_PATTERN.into(),
                failure_message: CROSS.into(),
            }),
        FieldSpec::new("location").check(CheckSpec::Presence {
            failure_message: CROSS.into(),
        }),
    ]
}
