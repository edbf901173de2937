//! Class synthesis building blocks.
//!
//! This module provides the core primitives for describing and printing a
//! generated class:
//! - [`CodeBuilder`] - Fluent API for building indented code
//! - [`CodeFragment`] - Intermediate representation for code pieces
//! - [`Renderable`] - Trait for types that can be converted to code fragments
//! - [`Indent`] - Indentation configuration
//!
//! # Declarative Class Specifications
//!
//! - [`ClassSpec`], [`Member`], [`PropertySpec`] - The class descriptor
//! - [`MethodSpec`], [`ParamSpec`], [`Statement`] - Methods and their bodies
//! - [`Value`] - Semantic expressions
//! - [`TypeRef`] - Language-agnostic type references
//! - [`ClassRenderer`], [`Renderer`], [`TypeMapper`] - Language-specific printing

mod class;
mod code_builder;
mod expr;
mod indent;
mod method;
mod renderable;
mod types;

pub use class::{ClassRenderer, ClassSpec, Member, PropertySpec};
pub use code_builder::CodeBuilder;
pub use expr::{ArrayItem, Renderer, Value};
pub use indent::Indent;
pub use method::{MethodSpec, ParamSpec, Statement};
pub use renderable::{CodeFragment, Renderable};
pub use types::{TypeMapper, TypeRef, Visibility};
