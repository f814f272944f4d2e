//! # Recording Observer
//!
//! Utilities for asserting on attribute lifecycle events in tests.
//!
//! ```ignore
//! let recorder = RecordingObserver::new();
//! let mut sv = StateVariable::<u32>::builder()
//!     .name("score")
//!     .observer(recorder.handle())
//!     .build()?;
//! sv.assign(5);
//! assert_eq!(recorder.kinds().last(), Some(&EventKind::Stored { init: false }));
//! ```

use super::{AttributeEvent, AttributeObserver, EventKind};
use std::sync::{Arc, Mutex};

/// Owned copy of an [`AttributeEvent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedEvent {
    pub name: Option<String>,
    pub index: u64,
    pub kind: EventKind,
}

/// Observer that stores every event it sees.
///
/// Clones share the same log, so a test can hand one clone to attributes and
/// inspect another.
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    events: Arc<Mutex<Vec<RecordedEvent>>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// This recorder as a shareable observer handle.
    pub fn handle(&self) -> Arc<dyn AttributeObserver> {
        Arc::new(self.clone())
    }

    /// Snapshot of all recorded events, oldest first.
    pub fn events(&self) -> Vec<RecordedEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    /// Just the event kinds, oldest first.
    pub fn kinds(&self) -> Vec<EventKind> {
        self.events().into_iter().map(|event| event.kind).collect()
    }

    /// Forgets everything recorded so far.
    pub fn clear(&self) {
        if let Ok(mut events) = self.events.lock() {
            events.clear();
        }
    }
}

impl AttributeObserver for RecordingObserver {
    fn on_event(&self, event: &AttributeEvent<'_>) {
        if let Ok(mut events) = self.events.lock() {
            events.push(RecordedEvent {
                name: event.name.map(str::to_owned),
                index: event.index,
                kind: event.kind,
            });
        }
    }
}
