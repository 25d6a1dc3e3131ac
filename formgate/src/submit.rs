//! Submit control seam.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Externally supplied submit enable/disable pair.
///
/// The gate calls exactly one of these from each validity callback; how the
/// control is rendered is the embedder's concern.
pub trait SubmitControl: Send + Sync {
    /// Allow submission.
    fn enable_submit(&self);

    /// Block submission.
    fn disable_submit(&self);
}

/// Shared-flag submit control.
///
/// Cloning returns a handle to the same flag, so the embedding event loop
/// keeps one handle while the gate owns another. The enable-call counter
/// lets tests observe how many aggregate passes reached the enable step.
#[derive(Debug, Default)]
pub struct SubmitState {
    /// True when submission is allowed
    enabled: Arc<AtomicBool>,
    /// Number of enable calls so far
    enable_calls: Arc<AtomicUsize>,
}

impl SubmitState {
    /// Create a disabled control.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether submission is currently allowed.
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }

    /// How many times the control has been enabled.
    pub fn enable_calls(&self) -> usize {
        self.enable_calls.load(Ordering::SeqCst)
    }
}

impl SubmitControl for SubmitState {
    fn enable_submit(&self) {
        self.enabled.store(true, Ordering::SeqCst);
        self.enable_calls.fetch_add(1, Ordering::SeqCst);
    }

    fn disable_submit(&self) {
        self.enabled.store(false, Ordering::SeqCst);
    }
}

impl Clone for SubmitState {
    fn clone(&self) -> Self {
        Self {
            enabled: Arc::clone(&self.enabled),
            enable_calls: Arc::clone(&self.enable_calls),
        }
    }
}
