//! Core value types and errors for the Punchcard config class generator.
//!
//! This crate provides the input values ([`ParameterAndType`]) and the error
//! taxonomy shared by the synthesis, manifest and printer crates.

mod error;
mod file;
mod parameter;
mod utils;

pub use error::{Error, NameDerivationError, ValidationError};
// File operations
pub use file::{File, Overwrite, WriteResult};
pub use parameter::{ParamType, ParameterAndType, ScalarType};
// String utilities
pub use utils::{is_class_name, is_identifier, ucfirst};
