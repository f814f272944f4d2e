//! # Collectable Attributes
//!
//! Every attribute kind implements [`Collectable`]. The trait owns the
//! public accessor surface (`value`, `assign`, `reset`, `name`, ...) and
//! routes reads and writes through two hooks, [`Collectable::get_value`] and
//! [`Collectable::set_value`]. Specializations such as
//! [`StateVariable`](crate::state::StateVariable) override the hooks and keep
//! the accessors untouched, so callers see one shape for every kind.
//!
//! # Provided Methods (Hooks)
//! - [`Collectable::get_value`] - returns the raw slot.
//! - [`Collectable::set_value`] - stores unconditionally.
//! - [`Collectable::reset`] - clears the set flag only.
//!
//! An implementation only supplies [`Collectable::base`] and
//! [`Collectable::base_mut`], plus whichever hooks it wants to change.
//!
//! `base_mut` takes an [`Internal`] token that only this crate can create.
//! Outside code can implement the method but never call it, so a gated kind
//! cannot be written or reset behind its own hooks:
//!
//! ```compile_fail
//! use collectable_attrs::attribute::Internal;
//! use collectable_attrs::{Collectable, StateVariable};
//!
//! let mut score = StateVariable::<u32>::disabled("score").unwrap();
//! score.base_mut(Internal(())).assign(10);
//! ```
//!
//! The raw slot operations behind the hooks are crate-private as well:
//!
//! ```compile_fail
//! use collectable_attrs::CollectableAttribute;
//!
//! let mut weight = CollectableAttribute::<u32>::new("weight").unwrap();
//! weight.store(10, false);
//! ```
//!
//! The trait is object safe, so a collection may hold
//! `Box<dyn Collectable<Value = V>>` of mixed kinds.

mod core;
mod error;

pub use self::core::{validate_name, AttributeBuilder, CollectableAttribute, RESERVED_PREFIX};
pub use error::AttributeError;

/// Access token for [`Collectable::base_mut`]. Only this crate constructs it.
#[derive(Debug)]
pub struct Internal(());

impl Internal {
    pub(crate) fn new() -> Self {
        Internal(())
    }
}

/// Contract shared by every attribute kind.
pub trait Collectable {
    /// Type of the payload held in the value slot.
    type Value;

    /// The embedded base attribute holding name, doc, index and slot.
    fn base(&self) -> &CollectableAttribute<Self::Value>;

    /// Mutable base for the provided hooks. Callable from this crate only.
    fn base_mut(&mut self, token: Internal) -> &mut CollectableAttribute<Self::Value>;

    // --- Hooks ---

    /// Read hook behind [`value`](Self::value).
    ///
    /// The base returns the raw slot without checking the set flag: `None`
    /// before the first write, the stale value after a reset.
    fn get_value(&self) -> Result<Option<&Self::Value>, AttributeError> {
        Ok(self.base().raw_value())
    }

    /// Write hook behind [`assign`](Self::assign).
    fn set_value(&mut self, value: Self::Value) {
        self.base_mut(Internal::new()).store(value, false);
    }

    /// Marks the attribute as not set. Name, doc, index and gates survive.
    fn reset(&mut self) {
        self.base_mut(Internal::new()).clear_set_flag();
    }

    // --- Accessors ---

    /// Reads the value through [`get_value`](Self::get_value).
    fn value(&self) -> Result<Option<&Self::Value>, AttributeError> {
        self.get_value()
    }

    /// Writes the value through [`set_value`](Self::set_value).
    fn assign(&mut self, value: Self::Value) {
        self.set_value(value);
    }

    fn name(&self) -> Option<&str> {
        self.base().name.as_deref()
    }

    fn doc(&self) -> Option<&str> {
        self.base().doc.as_deref()
    }

    /// Ordering index among sibling attributes.
    fn index(&self) -> u64 {
        self.base().index
    }

    /// True iff a value was written since construction or the last reset.
    fn is_set(&self) -> bool {
        self.base().is_set
    }

    /// Validates and replaces the name. See [`CollectableAttribute::set_name`].
    fn rename(&mut self, name: Option<String>) -> Result<(), AttributeError> {
        self.base_mut(Internal::new()).set_name(name)
    }
}
