//! # Attribute Observers
//!
//! Attributes report their lifecycle (initialization, stores, discarded
//! stores, resets and gate changes) to an injected [`AttributeObserver`].
//! Observation never changes control flow.
//!
//! - [`NoopObserver`] - the default, drops everything.
//! - [`TracingObserver`] - forwards events to `tracing`.
//! - [`RecordingObserver`] - keeps events in memory for assertions.

mod logging;
pub mod mock;

pub use logging::{setup_tracing, TracingObserver};
pub use mock::{RecordedEvent, RecordingObserver};

use std::fmt::Debug;
use std::sync::Arc;

/// What happened to an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// A new attribute was constructed.
    Initialized { state_variable: bool },
    /// A value was written. `init` marks the initializing store.
    Stored { init: bool },
    /// A write was dropped by a disabled state variable.
    Discarded,
    /// The set flag was cleared. `was_set` tells whether it had been set.
    Reset { was_set: bool },
    /// A state variable gate was opened.
    Enabled,
    /// A state variable gate was closed.
    Disabled,
}

/// A single observation, borrowed from the attribute that emitted it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeEvent<'a> {
    pub name: Option<&'a str>,
    pub index: u64,
    pub kind: EventKind,
}

/// Receives attribute lifecycle events.
///
/// The provided method ignores everything, so an implementation only has to
/// override what it cares about.
pub trait AttributeObserver: Send + Sync + Debug {
    fn on_event(&self, _event: &AttributeEvent<'_>) {}
}

/// Observer that ignores all events.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl AttributeObserver for NoopObserver {}

/// Shared handle to the default observer.
pub fn noop() -> Arc<dyn AttributeObserver> {
    Arc::new(NoopObserver)
}
