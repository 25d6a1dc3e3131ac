//! Tracked field state.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;

use crate::check::Check;

/// Per-field validity state machine.
///
/// `Untouched` is the initial state, before any check has run. The first
/// blur moves the field to `Invalid` or `Valid`; afterwards it toggles
/// between the two on each edit. There is no terminal state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Validity {
    /// No checks have run yet.
    #[default]
    Untouched,
    /// The last run failed a check.
    Invalid,
    /// The last run passed every check.
    Valid,
}

impl Validity {
    /// Whether this state counts toward aggregate validity.
    pub fn is_valid(self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// The marker currently shown next to a field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Indicator {
    /// Nothing shown yet.
    #[default]
    None,
    /// The field's valid message (e.g. "✔").
    Valid(String),
    /// The failure message of the first failing check (e.g. "✖").
    Invalid(String),
}

/// Display options for a field.
#[derive(Debug, Clone)]
pub struct FieldOptions {
    /// Message shown when the field passes all checks.
    pub valid_message: String,
    /// Debounce applied by the embedding event loop between a blur event
    /// and validation. The library itself never sleeps.
    pub blur_wait: Option<Duration>,
}

impl Default for FieldOptions {
    fn default() -> Self {
        Self {
            valid_message: "✔".to_string(),
            blur_wait: None,
        }
    }
}

/// Internal state for a tracked field
#[derive(Debug, Default)]
struct FieldInner {
    /// Current text value
    value: String,
    /// Checks in declaration order
    checks: Vec<Check>,
    /// Display options
    options: FieldOptions,
    /// Marker currently shown
    indicator: Indicator,
}

/// A named user-input field subject to validation checks.
///
/// `Field` is a shared-state handle: cloning returns a handle to the same
/// underlying state, so the gate, the embedding event loop, and callbacks
/// can each hold one.
#[derive(Debug)]
pub struct Field {
    /// Stable name, e.g. "price"
    name: String,
    /// Internal state
    inner: Arc<RwLock<FieldInner>>,
    /// Dirty flag for re-render
    dirty: Arc<AtomicBool>,
}

impl Field {
    /// Create an empty field with default options.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            inner: Arc::new(RwLock::new(FieldInner::default())),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Create a field with an initial value.
    pub fn with_value(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            inner: Arc::new(RwLock::new(FieldInner {
                value: value.into(),
                ..Default::default()
            })),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Replace the display options.
    pub fn with_options(self, options: FieldOptions) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.options = options;
        }
        self
    }

    /// Append a check. Checks run in the order they were added.
    pub fn add_check(&self, check: Check) {
        if let Ok(mut guard) = self.inner.write() {
            guard.checks.push(check);
        }
    }

    /// The stable field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    /// Get the current text value
    pub fn value(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.value.clone())
            .unwrap_or_default()
    }

    /// Check if the value is empty
    pub fn is_empty(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.value.is_empty())
            .unwrap_or(true)
    }

    /// Message shown when the field passes all checks
    pub fn valid_message(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.options.valid_message.clone())
            .unwrap_or_default()
    }

    /// Debounce between blur and validation, if configured
    pub fn blur_wait(&self) -> Option<Duration> {
        self.inner
            .read()
            .map(|guard| guard.options.blur_wait)
            .unwrap_or(None)
    }

    /// Get the marker currently shown next to the field
    pub fn indicator(&self) -> Indicator {
        self.inner
            .read()
            .map(|guard| guard.indicator.clone())
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Write methods
    // -------------------------------------------------------------------------

    /// Set the text value.
    ///
    /// Resets the indicator: the new value has not been checked yet.
    pub fn set_value(&self, value: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.value = value.into();
            guard.indicator = Indicator::None;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Clear the value.
    pub fn clear(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.value.clear();
            guard.indicator = Indicator::None;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Indicator rendering (driven by the gate callbacks)
    // -------------------------------------------------------------------------

    /// Show the valid marker.
    pub fn mark_valid(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.indicator = Indicator::Valid(guard.options.valid_message.clone());
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Show the invalid marker with the failing check's message.
    pub fn mark_invalid(&self, message: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.indicator = Indicator::Invalid(message.into());
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the field state has changed
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }

    // -------------------------------------------------------------------------
    // Validation
    // -------------------------------------------------------------------------

    /// Run the check list against the current value.
    ///
    /// Checks run in declaration order and short-circuit: the first failure
    /// determines the returned message.
    pub fn run_checks(&self) -> Result<(), String> {
        let Ok(guard) = self.inner.read() else {
            return Ok(());
        };
        for check in &guard.checks {
            if let Err(message) = check.run(&guard.value) {
                return Err(message.to_string());
            }
        }
        Ok(())
    }
}

impl Clone for Field {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}
