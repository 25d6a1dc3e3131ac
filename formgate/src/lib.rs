//! Live form validation with submit gating.
//!
//! A [`FormGate`](gate::FormGate) tracks a set of named fields, each carrying
//! an ordered list of presence/format checks. Fields report in through two
//! callbacks as the user edits them; whenever a field turns valid, the gate
//! re-validates the rest of the form and enables the submit control only when
//! every tracked field passes.
//!
//! # Example
//!
//! ```ignore
//! use formgate::prelude::*;
//!
//! let submit = SubmitState::new();
//! let gate = FormGate::new(submit.clone());
//! register_all(&gate, &event_details())?;
//!
//! gate.field("price").unwrap().set_value("$10.00");
//! gate.validate("price")?;
//!
//! if submit.is_enabled() {
//!     // Every tracked field is valid
//! }
//! ```

pub mod check;
pub mod error;
pub mod field;
pub mod forms;
pub mod gate;
pub mod submit;

pub use gate::FormGate;

pub mod prelude {
    pub use crate::check::Check;
    pub use crate::error::GateError;
    pub use crate::field::{Field, FieldOptions, Indicator, Validity};
    pub use crate::forms::{CheckSpec, FieldSpec, event_details, register_all};
    pub use crate::gate::FormGate;
    pub use crate::submit::{SubmitControl, SubmitState};
}
