//! Submit gating from aggregate field validity.

use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::GateError;
use crate::field::{Field, Validity};
use crate::submit::SubmitControl;

/// Tracks the validity of a set of named fields and decides when the submit
/// control should be enabled.
///
/// Two events drive the gate per field: the field failing its checks and the
/// field passing them. A field turning valid triggers an aggregate
/// re-validation of every other tracked field; a guard flag keeps callbacks
/// fired from inside that pass from starting a nested one.
///
/// # Example
///
/// ```ignore
/// let submit = SubmitState::new();
/// let gate = FormGate::new(submit.clone());
/// gate.register(field)?;
///
/// gate.validate("price")?;
/// if submit.is_enabled() {
///     // Every tracked field is valid
/// }
/// ```
pub struct FormGate<S: SubmitControl> {
    /// Tracked fields in registration order.
    fields: RwLock<Vec<Field>>,
    /// Field name -> last recorded validity.
    validity: RwLock<HashMap<String, Validity>>,
    /// True while an aggregate pass is running.
    mass_validating: AtomicBool,
    /// Submit enable/disable pair.
    submit: S,
}

impl<S: SubmitControl> FormGate<S> {
    /// Create a gate over the given submit control with no tracked fields.
    pub fn new(submit: S) -> Self {
        Self {
            fields: RwLock::new(Vec::new()),
            validity: RwLock::new(HashMap::new()),
            mass_validating: AtomicBool::new(false),
            submit,
        }
    }

    /// Add a field to the tracked set.
    ///
    /// The field starts `Untouched`; nothing runs until a blur event
    /// reaches [`FormGate::validate`].
    pub fn register(&self, field: Field) -> Result<(), GateError> {
        let name = field.name().to_string();
        if self.field(&name).is_some() {
            return Err(GateError::DuplicateField(name));
        }
        log::debug!("[FormGate::register] tracking '{}'", name);
        if let Ok(mut fields) = self.fields.write() {
            fields.push(field);
        }
        if let Ok(mut map) = self.validity.write() {
            map.insert(name, Validity::Untouched);
        }
        Ok(())
    }

    /// Run a tracked field's checks against its current value and dispatch
    /// the matching callback.
    ///
    /// This is the blur entry point; any configured blur debounce has
    /// already elapsed by the time the embedding loop calls it.
    pub fn validate(&self, name: &str) -> Result<Validity, GateError> {
        let field = self
            .field(name)
            .ok_or_else(|| GateError::UnknownField(name.to_string()))?;
        match field.run_checks() {
            Ok(()) => {
                self.on_field_valid(&field);
                Ok(Validity::Valid)
            }
            Err(message) => {
                self.on_field_invalid(&field, &message);
                Ok(Validity::Invalid)
            }
        }
    }

    /// Callback for a field that failed a check.
    ///
    /// Renders the failure message and disables submit. Safe to call
    /// repeatedly: a field that is already invalid stays invalid and other
    /// fields' recorded validity is untouched.
    pub fn on_field_invalid(&self, field: &Field, message: &str) {
        field.mark_invalid(message);
        self.record(field.name(), Validity::Invalid);
        self.submit.disable_submit();
    }

    /// Callback for a field that passed its checks.
    ///
    /// Renders the valid marker and records the result. The outermost call
    /// additionally re-validates every other tracked field and enables
    /// submit when they all pass; calls fired from inside that pass stop
    /// after the rendering step.
    pub fn on_field_valid(&self, field: &Field) {
        field.mark_valid();
        self.record(field.name(), Validity::Valid);

        if self.mass_validating.swap(true, Ordering::SeqCst) {
            // Already inside an aggregate pass.
            return;
        }

        // Exclude the trigger from the pass: its own event is what brought
        // us here, and re-checking it would fire this callback again.
        let (index, rest) = self.take_field(field.name());
        log::debug!(
            "[FormGate::on_field_valid] '{}' valid, aggregate pass over {} other field(s)",
            field.name(),
            rest.len()
        );
        if self.mass_validate(&rest) {
            log::debug!("[FormGate::on_field_valid] all fields valid, enabling submit");
            self.submit.enable_submit();
        }
        self.restore_field(field.clone(), index);

        self.mass_validating.store(false, Ordering::SeqCst);
    }

    /// Re-run every given field's checks, dispatching the matching callback
    /// for each, and report whether all of them passed.
    ///
    /// Callbacks fired from here re-enter [`FormGate::on_field_valid`] and
    /// [`FormGate::on_field_invalid`]; the guard flag keeps those re-entries
    /// from starting a second pass.
    pub fn mass_validate(&self, fields: &[Field]) -> bool {
        let mut all_valid = true;
        for field in fields {
            match field.run_checks() {
                Ok(()) => self.on_field_valid(field),
                Err(message) => {
                    self.on_field_invalid(field, &message);
                    all_valid = false;
                }
            }
        }
        all_valid
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// Look up a tracked field by name.
    pub fn field(&self, name: &str) -> Option<Field> {
        self.fields
            .read()
            .ok()
            .and_then(|fields| fields.iter().find(|f| f.name() == name).cloned())
    }

    /// Last recorded validity for a field name.
    pub fn validity(&self, name: &str) -> Option<Validity> {
        self.validity
            .read()
            .ok()
            .and_then(|map| map.get(name).copied())
    }

    /// Tracked field names in registration order.
    pub fn tracked(&self) -> Vec<String> {
        self.fields
            .read()
            .map(|fields| fields.iter().map(|f| f.name().to_string()).collect())
            .unwrap_or_default()
    }

    /// Whether every tracked field's last recorded result is valid.
    pub fn all_valid(&self) -> bool {
        self.tracked()
            .iter()
            .all(|name| self.validity(name).is_some_and(|v| v.is_valid()))
    }

    /// The submit control this gate drives.
    pub fn submit(&self) -> &S {
        &self.submit
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    /// Record a field's validity, logging transitions.
    fn record(&self, name: &str, validity: Validity) {
        if let Ok(mut map) = self.validity.write() {
            let previous = map.insert(name.to_string(), validity);
            if previous != Some(validity) {
                log::debug!("[FormGate::record] '{}' -> {:?}", name, validity);
            }
        }
    }

    /// Remove a field from the tracked set, returning its position and a
    /// snapshot of the remaining fields in order.
    fn take_field(&self, name: &str) -> (Option<usize>, Vec<Field>) {
        let Ok(mut fields) = self.fields.write() else {
            return (None, Vec::new());
        };
        let index = fields.iter().position(|f| f.name() == name);
        if let Some(index) = index {
            fields.remove(index);
        }
        (index, fields.clone())
    }

    /// Put a removed field back at its original position.
    fn restore_field(&self, field: Field, index: Option<usize>) {
        if let Some(index) = index
            && let Ok(mut fields) = self.fields.write()
        {
            let pos = index.min(fields.len());
            fields.insert(pos, field);
        }
    }
}
