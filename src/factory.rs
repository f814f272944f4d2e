//! # Attribute Factory
//!
//! Declaring attributes one by one means passing the same counter and
//! observer to every builder. [`AttributeFactory`] carries them, plus the
//! test-mode switch that forces state variables on, and hands out builders
//! that are already wired.
//!
//! ```
//! use collectable_attrs::{AttributeFactory, Collectable};
//!
//! let factory = AttributeFactory::for_tests();
//! let mut training_error = factory
//!     .state_variable::<f64>()
//!     .name("training_error")
//!     .enabled(false)
//!     .build()
//!     .unwrap();
//!
//! // Forced on by the test factory.
//! training_error.assign(0.25);
//! assert_eq!(training_error.value(), Ok(Some(&0.25)));
//! ```

use crate::attribute::AttributeBuilder;
use crate::config::AttributeConfig;
use crate::observer::{self, AttributeObserver, TracingObserver};
use crate::ordering::OrderingCounter;
use crate::state::StateVariableBuilder;
use std::sync::Arc;
use tracing::debug;

/// Shared wiring for declaring a family of attributes.
#[derive(Debug, Clone)]
pub struct AttributeFactory {
    counter: OrderingCounter,
    observer: Arc<dyn AttributeObserver>,
    enforce_states_enabled: bool,
}

impl AttributeFactory {
    /// Factory over `counter` with the no-op observer.
    pub fn new(counter: OrderingCounter) -> Self {
        Self {
            counter,
            observer: observer::noop(),
            enforce_states_enabled: false,
        }
    }

    /// Factory over the process-wide counter.
    pub fn global() -> Self {
        Self::new(OrderingCounter::global())
    }

    /// Private counter starting at 1, every state variable forced on.
    pub fn for_tests() -> Self {
        Self::new(OrderingCounter::new()).enforce_states_enabled(true)
    }

    pub fn from_config(config: &AttributeConfig) -> Self {
        let counter = match config.first_index {
            Some(first) => OrderingCounter::starting_at(first),
            None => OrderingCounter::global(),
        };
        let observer: Arc<dyn AttributeObserver> = if config.trace_events {
            Arc::new(TracingObserver)
        } else {
            observer::noop()
        };
        debug!(
            enforce_states_enabled = config.enforce_states_enabled,
            trace_events = config.trace_events,
            first_index = ?config.first_index,
            "Attribute factory configured"
        );
        Self {
            counter,
            observer,
            enforce_states_enabled: config.enforce_states_enabled,
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn AttributeObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn enforce_states_enabled(mut self, enforce: bool) -> Self {
        self.enforce_states_enabled = enforce;
        self
    }

    pub fn counter(&self) -> &OrderingCounter {
        &self.counter
    }

    pub fn enforces_states_enabled(&self) -> bool {
        self.enforce_states_enabled
    }

    /// Builder for a [`CollectableAttribute`](crate::CollectableAttribute).
    pub fn collectable<V>(&self) -> AttributeBuilder<V> {
        AttributeBuilder::default()
            .counter(self.counter.clone())
            .observer(Arc::clone(&self.observer))
    }

    /// Builder for a [`StateVariable`](crate::StateVariable).
    pub fn state_variable<V>(&self) -> StateVariableBuilder<V> {
        StateVariableBuilder::default()
            .counter(self.counter.clone())
            .observer(Arc::clone(&self.observer))
            .force_enabled(self.enforce_states_enabled)
    }
}

impl Default for AttributeFactory {
    fn default() -> Self {
        Self::global()
    }
}
