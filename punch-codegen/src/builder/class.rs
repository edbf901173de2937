//! Language-agnostic class definitions.
//!
//! A [`ClassSpec`] is the *class descriptor*: an ordered member list plus
//! metadata, independent of any printer. The [`ClassRenderer`] trait maps it
//! onto a concrete language.

use super::{
    expr::Value,
    method::MethodSpec,
    renderable::CodeFragment,
    types::{TypeRef, Visibility},
};

/// A declarative specification for a class.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassSpec {
    /// Class name.
    pub name: String,
    /// Whether the class is closed to extension.
    pub is_final: bool,
    /// Members in declaration order, blank markers included.
    pub members: Vec<Member>,
}

impl ClassSpec {
    /// Create a new, empty, extensible class spec.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_final: false,
            members: Vec::new(),
        }
    }

    /// Mark the class as final.
    pub fn final_(mut self) -> Self {
        self.is_final = true;
        self
    }

    /// Add a member.
    pub fn member(mut self, member: Member) -> Self {
        self.members.push(member);
        self
    }

    /// Add multiple members.
    pub fn members(mut self, members: impl IntoIterator<Item = Member>) -> Self {
        self.members.extend(members);
        self
    }

    /// Iterate over property members in declaration order.
    pub fn properties(&self) -> impl Iterator<Item = &PropertySpec> {
        self.members.iter().filter_map(Member::as_property)
    }

    /// Iterate over method members in declaration order.
    pub fn methods(&self) -> impl Iterator<Item = &MethodSpec> {
        self.members.iter().filter_map(Member::as_method)
    }

    /// Find the first method with the given name.
    pub fn method(&self, name: &str) -> Option<&MethodSpec> {
        self.methods().find(|m| m.name == name)
    }

    /// Find the first property with the given name.
    pub fn property(&self, name: &str) -> Option<&PropertySpec> {
        self.properties().find(|p| p.name == name)
    }
}

/// A class body entry.
#[derive(Debug, Clone, PartialEq)]
pub enum Member {
    Property(PropertySpec),
    Method(MethodSpec),
    /// Blank-statement marker: no semantics, renders as an empty line.
    Nop,
}

impl Member {
    /// Check if this is a blank marker.
    pub fn is_nop(&self) -> bool {
        matches!(self, Self::Nop)
    }

    pub fn as_property(&self) -> Option<&PropertySpec> {
        match self {
            Self::Property(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_method(&self) -> Option<&MethodSpec> {
        match self {
            Self::Method(m) => Some(m),
            _ => None,
        }
    }
}

impl From<PropertySpec> for Member {
    fn from(property: PropertySpec) -> Self {
        Self::Property(property)
    }
}

impl From<MethodSpec> for Member {
    fn from(method: MethodSpec) -> Self {
        Self::Method(method)
    }
}

/// A typed property declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertySpec {
    /// Property name.
    pub name: String,
    /// Declared type.
    pub ty: TypeRef,
    /// Default value, if any.
    pub default: Option<Value>,
    /// Type stated in a doc annotation (`@var`), if any.
    pub doc_type: Option<TypeRef>,
    /// Visibility modifier.
    pub visibility: Visibility,
}

impl PropertySpec {
    /// Create a new private property.
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            default: None,
            doc_type: None,
            visibility: Visibility::Private,
        }
    }

    /// Set the default value.
    pub fn default(mut self, value: Value) -> Self {
        self.default = Some(value);
        self
    }

    /// Annotate the property with a doc type.
    pub fn doc_type(mut self, ty: TypeRef) -> Self {
        self.doc_type = Some(ty);
        self
    }
}

/// Trait for rendering class specs to language-specific code.
///
/// Implement this trait to print the class descriptor in a new target
/// language. Member order and blank markers must be preserved as given.
pub trait ClassRenderer {
    /// Render a class specification to code.
    fn render_class(&self, spec: &ClassSpec) -> String;

    /// Render a property declaration.
    fn render_property(&self, spec: &PropertySpec) -> Vec<CodeFragment>;

    /// Render a method declaration.
    fn render_method(&self, spec: &MethodSpec) -> Vec<CodeFragment>;

    /// Render a visibility modifier.
    fn render_visibility(&self, vis: Visibility) -> &'static str;
}
