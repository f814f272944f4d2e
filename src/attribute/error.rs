//! Error types for attributes.

use thiserror::Error;

/// Errors raised by attribute construction, copying, renaming and strict
/// reads.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AttributeError {
    /// The name is empty or starts with the reserved `_` prefix.
    #[error("Invalid attribute name {name:?}: {reason}")]
    InvalidName { name: String, reason: &'static str },

    /// A state variable was read before any value was stored.
    #[error("Unknown yet value of {0}")]
    UnsetValue(String),

    /// The ordering counter has no indices left.
    #[error("Ordering counter exhausted")]
    IndexExhausted,
}

impl AttributeError {
    /// Returns true for [`AttributeError::InvalidName`].
    pub fn is_invalid_name(&self) -> bool {
        matches!(self, AttributeError::InvalidName { .. })
    }

    /// Returns true for [`AttributeError::UnsetValue`].
    pub fn is_unset_value(&self) -> bool {
        matches!(self, AttributeError::UnsetValue(_))
    }
}
