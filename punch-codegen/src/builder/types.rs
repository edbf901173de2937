//! Language-agnostic type system for class synthesis.
//!
//! This module provides abstractions for representing types in a way that
//! can be rendered to a target language via the [`TypeMapper`] trait.

use punchcard_core::{ParamType, ScalarType};

/// A language-agnostic type reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    /// A scalar type (string, int, bool, etc.).
    Scalar(ScalarType),
    /// A typed collection. Only expressible in doc annotations
    /// (`string[]`); native declarations render the container type.
    ArrayOf(Box<TypeRef>),
    /// A named class type.
    Named(String),
    /// The enclosing class (`self` in PHP).
    SelfType,
}

impl TypeRef {
    /// Create a scalar type reference.
    pub fn scalar(ty: ScalarType) -> Self {
        Self::Scalar(ty)
    }

    /// Create a typed collection reference.
    pub fn array_of(inner: TypeRef) -> Self {
        Self::ArrayOf(Box::new(inner))
    }

    /// Create a named type reference.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Convenience: String type.
    pub fn string() -> Self {
        Self::Scalar(ScalarType::String)
    }

    /// Convenience: Array type.
    pub fn array() -> Self {
        Self::Scalar(ScalarType::Array)
    }

    /// Convenience: the enclosing class.
    pub fn self_type() -> Self {
        Self::SelfType
    }
}

impl From<&ParamType> for TypeRef {
    fn from(ty: &ParamType) -> Self {
        match ty {
            ParamType::Scalar(scalar) => Self::Scalar(*scalar),
            ParamType::Class(name) => Self::Named(name.clone()),
        }
    }
}

/// Visibility/access level for class members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Public,
    Private,
}

impl Visibility {
    /// Check if this is a public visibility.
    pub fn is_public(&self) -> bool {
        matches!(self, Self::Public)
    }

    /// Check if this is a private visibility.
    pub fn is_private(&self) -> bool {
        matches!(self, Self::Private)
    }
}

/// Trait for mapping types to language-specific representations.
///
/// Implement this trait to support a new target language's type system.
pub trait TypeMapper {
    /// Map a scalar type to the target language.
    fn map_scalar(&self, ty: ScalarType) -> String;

    /// Map the enclosing class type.
    fn map_self(&self) -> String;

    /// Map a typed collection in a native declaration.
    fn map_array_of(&self, inner: &str) -> String;

    /// Map a typed collection in a doc annotation (e.g., `string[]`).
    fn map_doc_array_of(&self, inner: &str) -> String {
        format!("{}[]", inner)
    }

    /// Render a TypeRef for a native type declaration.
    fn render_type(&self, ty: &TypeRef) -> String {
        match ty {
            TypeRef::Scalar(s) => self.map_scalar(*s),
            TypeRef::ArrayOf(inner) => {
                let inner_str = self.render_type(inner);
                self.map_array_of(&inner_str)
            }
            TypeRef::Named(name) => name.clone(),
            TypeRef::SelfType => self.map_self(),
        }
    }

    /// Render a TypeRef for a doc annotation.
    fn render_doc_type(&self, ty: &TypeRef) -> String {
        match ty {
            TypeRef::ArrayOf(inner) => {
                let inner_str = self.render_doc_type(inner);
                self.map_doc_array_of(&inner_str)
            }
            other => self.render_type(other),
        }
    }
}
