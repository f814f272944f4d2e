//! # Observability & Tracing
//!
//! [`TracingObserver`] turns attribute events into structured `tracing`
//! records. Stores and discarded stores are frequent, so they go out at
//! `trace` level; construction, resets and gate changes use `debug`.
//!
//! ```bash
//! # Gate changes and resets
//! RUST_LOG=collectable_attrs=debug cargo test
//!
//! # Every store as well
//! RUST_LOG=collectable_attrs=trace cargo test
//! ```

use super::{AttributeEvent, AttributeObserver, EventKind};
use tracing::{debug, trace};

/// Observer that logs events through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl AttributeObserver for TracingObserver {
    fn on_event(&self, event: &AttributeEvent<'_>) {
        let name = event.name.unwrap_or("<unnamed>");
        let index = event.index;
        match event.kind {
            EventKind::Initialized { state_variable } => {
                debug!(attribute = name, index, state_variable, "Initialized")
            }
            EventKind::Stored { init: true } => trace!(attribute = name, index, "Initializing"),
            EventKind::Stored { init: false } => trace!(attribute = name, index, "Setting"),
            EventKind::Discarded => trace!(attribute = name, index, "Not setting disabled"),
            // Resetting an attribute that was never set is not worth a line.
            EventKind::Reset { was_set: true } => debug!(attribute = name, index, "Reset"),
            EventKind::Reset { was_set: false } => {}
            EventKind::Enabled => debug!(attribute = name, index, "Enabling"),
            EventKind::Disabled => debug!(attribute = name, index, "Disabling"),
        }
    }
}

/// Initializes structured logging for hosts and tests.
///
/// Verbosity comes from the `RUST_LOG` environment variable. Returns `false`
/// when a global subscriber was already installed, by an earlier call or by
/// the host. That subscriber stays in place.
pub fn setup_tracing() -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .try_init()
        .is_ok()
}
