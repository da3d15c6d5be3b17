//! Concrete store and diagnostics implementations for the blend engine.
//!
//! [`MemoryStore`] implements every read-only oracle `herbalism-core`
//! defines, so the whole resolution pipeline can run without a persistent
//! backend. [`TracingSink`] wires the engine's diagnostics capability into
//! `tracing`; [`RecordingSink`] captures events for tests.

mod memory;
mod sink;

pub use memory::MemoryStore;
pub use sink::{RecordingSink, TracingSink};

use herbalism_core::{BlendEnv, DiagnosticsSink, Env};

/// Builds a resolution environment over a store, with an optional sink.
pub fn env_for<'a>(
    store: &'a MemoryStore,
    sink: Option<&'a dyn DiagnosticsSink>,
) -> BlendEnv<'a> {
    let env = Env::with_all(store, store, store);
    match sink {
        Some(sink) => env.with_sink(sink).into_blend_env(),
        None => env.into_blend_env(),
    }
}
