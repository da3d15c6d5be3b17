use crate::env::error::Diagnostic;

/// Append-only sink for internal-consistency events.
///
/// Injected as a capability rather than reached through a global logger, so
/// the engine stays a pure function of its inputs plus this one collaborator.
/// Implementations must not fail; the engine fires and forgets.
pub trait DiagnosticsSink: Send + Sync {
    fn report(&self, event: &Diagnostic);
}

/// Sink that drops every event. Used when no sink is injected.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl DiagnosticsSink for NoopSink {
    fn report(&self, _event: &Diagnostic) {}
}
