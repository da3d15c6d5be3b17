//! Diagnostics sink implementations.

use std::sync::Mutex;

use herbalism_core::{Diagnostic, DiagnosticsSink};

/// Sink that forwards internal-consistency events to `tracing`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl DiagnosticsSink for TracingSink {
    fn report(&self, event: &Diagnostic) {
        match event {
            Diagnostic::MissingSludge { .. } => {
                tracing::warn!(target: "herbalism", %event, "blend diagnostics");
            }
            _ => {
                tracing::error!(target: "herbalism", %event, "blend diagnostics");
            }
        }
    }
}

/// Sink that records events for assertions in tests.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<Diagnostic>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Diagnostic>> {
        // A panicking reader cannot corrupt a Vec of clones; recover the data.
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Returns a snapshot of everything reported so far.
    pub fn events(&self) -> Vec<Diagnostic> {
        self.lock().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl DiagnosticsSink for RecordingSink {
    fn report(&self, event: &Diagnostic) {
        self.lock().push(event.clone());
    }
}
