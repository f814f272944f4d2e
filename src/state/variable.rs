//! # StateVariable
//!
//! A collectable attribute that stores conditionally. Calling code can
//! always try to record a value; whether it sticks depends on the gate.
//!
//! State axes and transitions:
//!
//! | From | Operation | To |
//! |------|-----------|----|
//! | any, enabled | `assign(v)` | set, enabled |
//! | any, disabled | `assign(v)` | unchanged |
//! | any | `enable(flag)` | set axis unchanged, gate = `flag` |
//! | any | `reset()` | unset, gate unchanged |
//!
//! Reading is only valid while set; otherwise it fails with
//! [`AttributeError::UnsetValue`].

use crate::attribute::{AttributeError, Collectable, CollectableAttribute, Internal};
use crate::observer::{self, AttributeObserver, EventKind};
use crate::ordering::OrderingCounter;
use std::fmt;
use std::sync::Arc;

/// Doc string used when none is given.
pub const DEFAULT_DOC: &str = "State variable";

/// Attribute with an enable gate and strict reads.
pub struct StateVariable<V> {
    base: CollectableAttribute<V>,
    is_enabled: bool,
    default_enabled: bool,
}

impl<V> StateVariable<V> {
    /// Starts a builder: enabled, doc [`DEFAULT_DOC`], global counter.
    pub fn builder() -> StateVariableBuilder<V> {
        StateVariableBuilder::default()
    }

    /// An enabled, unset state variable called `name`.
    pub fn new(name: impl Into<String>) -> Result<Self, AttributeError> {
        Self::builder().name(name).build()
    }

    /// A disabled, unset state variable called `name`.
    pub fn disabled(name: impl Into<String>) -> Result<Self, AttributeError> {
        Self::builder().name(name).enabled(false).build()
    }

    pub fn is_enabled(&self) -> bool {
        self.is_enabled
    }

    /// The gate chosen at construction.
    pub fn default_enabled(&self) -> bool {
        self.default_enabled
    }

    /// Opens or closes the gate. A no-op when already at `flag`.
    ///
    /// Never touches the set flag or the stored value; values dropped while
    /// disabled stay dropped.
    pub fn enable(&mut self, flag: bool) {
        if self.is_enabled == flag {
            return;
        }
        self.base.emit(if flag {
            EventKind::Enabled
        } else {
            EventKind::Disabled
        });
        self.is_enabled = flag;
    }

    /// Puts the gate back to [`default_enabled`](Self::default_enabled).
    pub fn restore_default(&mut self) {
        self.enable(self.default_enabled);
    }

    /// Strict read without the `Option` layer.
    pub fn get(&self) -> Result<&V, AttributeError> {
        match self.base.raw_value() {
            Some(value) if self.base.is_set => Ok(value),
            _ => Err(self.unset_error()),
        }
    }

    /// Strict mutable read, for updating a compound value in place.
    pub fn get_mut(&mut self) -> Result<&mut V, AttributeError> {
        if !self.base.is_set {
            return Err(self.unset_error());
        }
        let error = self.unset_error();
        self.base.value_mut().ok_or(error)
    }

    fn unset_error(&self) -> AttributeError {
        AttributeError::UnsetValue(self.base.name.clone().unwrap_or_else(|| "<unnamed>".into()))
    }
}

impl<V: Clone> StateVariable<V> {
    /// Copy with the same name and doc and a fresh index, built like a
    /// newly declared variable: enabled, with an enabled default. A set
    /// value is cloned in through [`set_value`](Collectable::set_value),
    /// which the open gate accepts. The source gate is not carried over.
    pub fn duplicate(&self) -> Result<Self, AttributeError> {
        let mut copied = Self {
            base: self.base.blank_copy(true)?,
            is_enabled: true,
            default_enabled: true,
        };
        if let Ok(value) = self.get() {
            copied.set_value(value.clone());
        }
        Ok(copied)
    }
}

impl<V> Collectable for StateVariable<V> {
    type Value = V;

    fn base(&self) -> &CollectableAttribute<V> {
        &self.base
    }

    fn base_mut(&mut self, _: Internal) -> &mut CollectableAttribute<V> {
        &mut self.base
    }

    fn get_value(&self) -> Result<Option<&V>, AttributeError> {
        self.get().map(Some)
    }

    fn set_value(&mut self, value: V) {
        if self.is_enabled {
            self.base.store(value, false);
        } else {
            self.base.emit(EventKind::Discarded);
        }
    }

    /// Clears the set flag and drops the stored value, whatever the gate.
    fn reset(&mut self) {
        self.base.clear_set_flag();
        self.base.release_value();
    }
}

impl<V> fmt::Display for StateVariable<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.base)?;
        if self.is_enabled {
            f.write_str("+")?;
        }
        Ok(())
    }
}

impl<V: fmt::Debug> fmt::Debug for StateVariable<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateVariable")
            .field("name", &self.base.name)
            .field("doc", &self.base.doc)
            .field("index", &self.base.index)
            .field("value", &self.get().ok())
            .field("enabled", &self.is_enabled)
            .finish()
    }
}

/// Builder for [`StateVariable`].
pub struct StateVariableBuilder<V> {
    name: Option<String>,
    doc: Option<String>,
    index: Option<u64>,
    enabled: bool,
    force_enabled: bool,
    counter: Option<OrderingCounter>,
    observer: Option<Arc<dyn AttributeObserver>>,
    _value: std::marker::PhantomData<fn() -> V>,
}

impl<V> Default for StateVariableBuilder<V> {
    fn default() -> Self {
        Self {
            name: None,
            doc: None,
            index: None,
            enabled: true,
            force_enabled: false,
            counter: None,
            observer: None,
            _value: std::marker::PhantomData,
        }
    }
}

impl<V> StateVariableBuilder<V> {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Explicit ordering index. Not checked against the counter.
    pub fn index(mut self, index: u64) -> Self {
        self.index = Some(index);
        self
    }

    /// Initial gate. Defaults to enabled.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// When true the variable is built enabled whatever [`enabled`](Self::enabled)
    /// says. Test harnesses use this to record every state.
    pub fn force_enabled(mut self, force: bool) -> Self {
        self.force_enabled = force;
        self
    }

    pub fn counter(mut self, counter: OrderingCounter) -> Self {
        self.counter = Some(counter);
        self
    }

    pub fn observer(mut self, observer: Arc<dyn AttributeObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn build(self) -> Result<StateVariable<V>, AttributeError> {
        let enabled = self.enabled || self.force_enabled;
        let base = CollectableAttribute::from_parts(
            self.name,
            Some(self.doc.unwrap_or_else(|| DEFAULT_DOC.to_owned())),
            self.index,
            self.counter.unwrap_or_else(OrderingCounter::global),
            self.observer.unwrap_or_else(observer::noop),
            true,
        )?;
        Ok(StateVariable {
            base,
            is_enabled: enabled,
            default_enabled: enabled,
        })
    }
}
