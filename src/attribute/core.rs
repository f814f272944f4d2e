//! # CollectableAttribute
//!
//! The base attribute: a name, a doc string, an ordering index and a single
//! value slot with a "has been set" flag.
//!
//! Resetting the base attribute only clears the flag. The slot keeps the
//! old value, which is stale but still reachable through
//! [`raw_value`](CollectableAttribute::raw_value) and through the base
//! `get_value` hook.

use super::{AttributeError, Collectable, Internal};
use crate::observer::{self, AttributeEvent, AttributeObserver, EventKind};
use crate::ordering::OrderingCounter;
use std::fmt;
use std::sync::Arc;

/// Names starting with this character are reserved for the owning object.
pub const RESERVED_PREFIX: char = '_';

/// Checks that `name` may be used as an attribute name.
pub fn validate_name(name: &str) -> Result<(), AttributeError> {
    if name.is_empty() {
        return Err(AttributeError::InvalidName {
            name: name.to_owned(),
            reason: "must not be empty",
        });
    }
    if name.starts_with(RESERVED_PREFIX) {
        return Err(AttributeError::InvalidName {
            name: name.to_owned(),
            reason: "must not start with `_`",
        });
    }
    Ok(())
}

/// Named, ordered value slot intended to become part of a collection.
pub struct CollectableAttribute<V> {
    pub(crate) name: Option<String>,
    pub(crate) doc: Option<String>,
    pub(crate) index: u64,
    value: Option<V>,
    pub(crate) is_set: bool,
    counter: OrderingCounter,
    observer: Arc<dyn AttributeObserver>,
}

impl<V> CollectableAttribute<V> {
    /// Starts a builder with no name, no doc and the global counter.
    pub fn builder() -> AttributeBuilder<V> {
        AttributeBuilder::default()
    }

    /// An unset attribute called `name`.
    pub fn new(name: impl Into<String>) -> Result<Self, AttributeError> {
        Self::builder().name(name).build()
    }

    /// An attribute called `name` initialized with `value`.
    pub fn with_value(name: impl Into<String>, value: V) -> Result<Self, AttributeError> {
        Self::builder().name(name).value(value).build()
    }

    /// Validates the name, then draws an index unless one was given.
    pub(crate) fn from_parts(
        name: Option<String>,
        doc: Option<String>,
        index: Option<u64>,
        counter: OrderingCounter,
        observer: Arc<dyn AttributeObserver>,
        state_variable: bool,
    ) -> Result<Self, AttributeError> {
        if let Some(name) = &name {
            validate_name(name)?;
        }
        let index = match index {
            Some(index) => index,
            None => counter.next()?,
        };
        let attribute = Self {
            name,
            doc,
            index,
            value: None,
            is_set: false,
            counter,
            observer,
        };
        attribute.emit(EventKind::Initialized { state_variable });
        Ok(attribute)
    }

    /// Writes `value` and marks the attribute as set, with no gating.
    ///
    /// This is the base behaviour that overriding `set_value` hooks delegate
    /// to once they decide the write should happen.
    pub(crate) fn store(&mut self, value: V, init: bool) {
        self.emit(EventKind::Stored { init });
        self.value = Some(value);
        self.is_set = true;
    }

    /// The slot contents regardless of the set flag.
    pub fn raw_value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    /// Mutable access to what [`value`](Collectable::value) reads, for
    /// updating a compound value in place.
    ///
    /// Only reachable on a base attribute you own: wrappers such as
    /// [`StateVariable`](crate::state::StateVariable) never hand out their
    /// base mutably.
    pub fn value_mut(&mut self) -> Option<&mut V> {
        self.value.as_mut()
    }

    /// Clears the set flag and leaves the slot alone.
    pub(crate) fn clear_set_flag(&mut self) {
        self.emit(EventKind::Reset {
            was_set: self.is_set,
        });
        self.is_set = false;
    }

    /// Empties the slot so the old value can be dropped.
    pub(crate) fn release_value(&mut self) -> Option<V> {
        self.value.take()
    }

    /// Replaces the name after validating it. On error the old name stays.
    ///
    /// Only meant for attributes that have not been attached to a
    /// collection yet, since collections index attributes by name.
    pub fn set_name(&mut self, name: Option<String>) -> Result<(), AttributeError> {
        if let Some(name) = &name {
            validate_name(name)?;
        }
        self.name = name;
        Ok(())
    }

    /// The counter this attribute draws indices from.
    pub fn counter(&self) -> &OrderingCounter {
        &self.counter
    }

    /// The observer receiving this attribute's events.
    pub fn observer(&self) -> &Arc<dyn AttributeObserver> {
        &self.observer
    }

    /// Reports `kind` for this attribute.
    pub(crate) fn emit(&self, kind: EventKind) {
        self.observer.on_event(&AttributeEvent {
            name: self.name.as_deref(),
            index: self.index,
            kind,
        });
    }
}

impl<V: Clone> CollectableAttribute<V> {
    /// Copy with the same name, doc and observer, a fresh index and an
    /// independently owned value.
    ///
    /// Whatever the slot holds is written into the copy through
    /// [`set_value`](Collectable::set_value), so a stale value left behind
    /// by `reset` comes back marked as set. Fails only when the counter is
    /// exhausted.
    pub fn duplicate(&self) -> Result<Self, AttributeError> {
        let mut copied = self.blank_copy(false)?;
        if let Some(value) = &self.value {
            copied.set_value(value.clone());
        }
        Ok(copied)
    }
}

impl<V> CollectableAttribute<V> {
    /// Unset attribute with this one's name, doc, counter and observer and
    /// the next index. The name was validated when it was assigned.
    pub(crate) fn blank_copy(&self, state_variable: bool) -> Result<Self, AttributeError> {
        let copied = Self {
            name: self.name.clone(),
            doc: self.doc.clone(),
            index: self.counter.next()?,
            value: None,
            is_set: false,
            counter: self.counter.clone(),
            observer: Arc::clone(&self.observer),
        };
        copied.emit(EventKind::Initialized { state_variable });
        Ok(copied)
    }
}

impl<V> Collectable for CollectableAttribute<V> {
    type Value = V;

    fn base(&self) -> &CollectableAttribute<V> {
        self
    }

    fn base_mut(&mut self, _: Internal) -> &mut CollectableAttribute<V> {
        self
    }
}

impl<V> fmt::Display for CollectableAttribute<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name.as_deref().unwrap_or("<unnamed>"))?;
        if self.is_set {
            f.write_str("*")?;
        }
        Ok(())
    }
}

impl<V: fmt::Debug> fmt::Debug for CollectableAttribute<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // A stale slot is reported as no value.
        let value = if self.is_set { self.value.as_ref() } else { None };
        f.debug_struct("CollectableAttribute")
            .field("name", &self.name)
            .field("doc", &self.doc)
            .field("index", &self.index)
            .field("value", &value)
            .finish()
    }
}

/// Builder for [`CollectableAttribute`].
pub struct AttributeBuilder<V> {
    name: Option<String>,
    doc: Option<String>,
    index: Option<u64>,
    value: Option<V>,
    counter: Option<OrderingCounter>,
    observer: Option<Arc<dyn AttributeObserver>>,
}

impl<V> Default for AttributeBuilder<V> {
    fn default() -> Self {
        Self {
            name: None,
            doc: None,
            index: None,
            value: None,
            counter: None,
            observer: None,
        }
    }
}

impl<V> AttributeBuilder<V> {
    /// Name under which the attribute appears in its collection.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Purpose of the attribute, shown in listings.
    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Explicit ordering index. Not checked against the counter.
    pub fn index(mut self, index: u64) -> Self {
        self.index = Some(index);
        self
    }

    /// Initial value, stored even if a subclass would gate writes.
    pub fn value(mut self, value: V) -> Self {
        self.value = Some(value);
        self
    }

    /// Counter to draw the index from instead of the global one.
    pub fn counter(mut self, counter: OrderingCounter) -> Self {
        self.counter = Some(counter);
        self
    }

    pub fn observer(mut self, observer: Arc<dyn AttributeObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn build(self) -> Result<CollectableAttribute<V>, AttributeError> {
        let mut attribute = CollectableAttribute::from_parts(
            self.name,
            self.doc,
            self.index,
            self.counter.unwrap_or_else(OrderingCounter::global),
            self.observer.unwrap_or_else(observer::noop),
            false,
        )?;
        if let Some(value) = self.value {
            attribute.store(value, true);
        }
        Ok(attribute)
    }
}
