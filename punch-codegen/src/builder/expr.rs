//! Language-agnostic expressions.
//!
//! [`Value`] represents the *meaning* of an expression inside a generated
//! method body. Each language's [`Renderer`] decides how to format it.

use super::method::Statement;

/// A semantic expression that can be rendered to any language.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// String literal (will be quoted).
    String(String),
    /// Local variable or parameter reference.
    Variable(String),
    /// The current instance (`$this`).
    This,
    /// Property read on an object: `$this->name`.
    PropertyFetch {
        /// Object the property is read from.
        object: Box<Value>,
        /// Property name.
        property: String,
    },
    /// Object construction: `new self()`.
    New {
        /// Class name or `self`.
        class: String,
    },
    /// Keyed collection literal (`[]` when empty).
    Array(Vec<ArrayItem>),
}

impl Value {
    /// Create a string literal value.
    pub fn string(v: impl Into<String>) -> Self {
        Self::String(v.into())
    }

    /// Create a variable reference.
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }

    /// Create a property read on an object.
    pub fn property_fetch(object: Value, property: impl Into<String>) -> Self {
        Self::PropertyFetch {
            object: Box::new(object),
            property: property.into(),
        }
    }

    /// Create a property read on the current instance.
    pub fn this_property(property: impl Into<String>) -> Self {
        Self::property_fetch(Self::This, property)
    }

    /// Create an object construction.
    pub fn new_instance(class: impl Into<String>) -> Self {
        Self::New {
            class: class.into(),
        }
    }

    /// Create an empty collection literal.
    pub fn empty_array() -> Self {
        Self::Array(Vec::new())
    }

    /// Create a collection literal.
    pub fn array(items: impl IntoIterator<Item = ArrayItem>) -> Self {
        Self::Array(items.into_iter().collect())
    }
}

/// One `key => value` entry in a collection literal.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayItem {
    /// Entry key.
    pub key: Value,
    /// Entry value.
    pub value: Value,
}

impl ArrayItem {
    /// Create a keyed entry.
    pub fn new(key: Value, value: Value) -> Self {
        Self { key, value }
    }
}

/// Trait for rendering expressions and statements to a target language.
pub trait Renderer {
    /// Render a value to code.
    fn render_value(&self, value: &Value) -> String;

    /// Render a single statement to one line of code.
    fn render_statement(&self, stmt: &Statement) -> String;
}
