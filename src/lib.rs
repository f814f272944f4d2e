//! # Collectable Attributes
//!
//! Building blocks for objects (classifiers, kernels, ...) that declare
//! named, orderable attributes which an outer mechanism later gathers into
//! per-object collections such as "reported states" or "tunable parameters".
//!
//! ## Core Concepts
//!
//! ### [`Collectable`] - one accessor surface, overridable hooks
//! Every attribute reads and writes through [`Collectable::value`] and
//! [`Collectable::assign`]. Those forward to the `get_value`/`set_value`
//! hooks, which specializations override. Callers never branch on the
//! attribute kind.
//!
//! ### [`CollectableAttribute`] - the base
//! Name, doc, ordering index and a value slot. Reading an unset base
//! attribute yields `Ok(None)`; `reset` clears the flag and keeps the slot.
//!
//! ### [`StateVariable`] - conditional storage
//! Adds an enable gate. Writes to a disabled variable are silently dropped,
//! reads before a successful write fail with
//! [`AttributeError::UnsetValue`], and `reset` drops the stored value.
//!
//! ```
//! use collectable_attrs::{Collectable, StateVariable};
//!
//! let mut score = StateVariable::new("score").unwrap();
//! assert!(score.value().is_err());
//!
//! score.assign(5);
//! score.enable(false);
//! score.assign(10);
//! assert_eq!(score.value(), Ok(Some(&5)));
//!
//! score.reset();
//! assert!(!score.is_set());
//! ```
//!
//! ## Ordering
//!
//! Attributes built without an explicit index draw one from an
//! [`OrderingCounter`], either the process-wide one or one passed in via a
//! builder or an [`AttributeFactory`].
//!
//! ## Observability
//!
//! Lifecycle events go to an injected [`AttributeObserver`]. The default
//! drops them; [`TracingObserver`] logs them with `tracing`. See
//! [`observer::setup_tracing`] for installing a subscriber.

pub mod attribute;
pub mod config;
pub mod factory;
pub mod observer;
pub mod ordering;
pub mod state;

// Re-export core types for convenience
pub use attribute::{AttributeBuilder, AttributeError, Collectable, CollectableAttribute};
pub use config::{AttributeConfig, ConfigError};
pub use factory::AttributeFactory;
pub use observer::{AttributeEvent, AttributeObserver, EventKind, NoopObserver, TracingObserver};
pub use ordering::OrderingCounter;
pub use state::{StateVariable, StateVariableBuilder};
