//! Language-agnostic config class synthesis for Punchcard.
//!
//! Given an ordered list of [`ParameterAndType`](punchcard_core::ParameterAndType)
//! values and a config file name, [`factory::ConfigClassFactory`] produces a
//! [`builder::ClassSpec`]: private typed properties, a static `create()`,
//! one fluent setter per parameter and a `toArray()` export, separated by
//! blank markers. Printing the descriptor is left to a language crate
//! (e.g., `punchcard-codegen-php`).
//!
//! # Module Organization
//!
//! - [`builder`] - Class descriptor types and printing building blocks
//! - [`factory`] - Property, setter, `toArray` and class factories
//! - [`language`] - Language generator abstractions
//! - [`naming`] - Class name derivation from file names
//! - [`testing`] - Descriptor evaluator (feature-gated)

pub mod builder;
pub mod factory;
pub mod language;
pub mod naming;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use language::{GenerateResult, LanguageCodegen, PreviewFile};
