//! Conditionally stored attributes.

mod variable;

pub use variable::{StateVariable, StateVariableBuilder, DEFAULT_DOC};
