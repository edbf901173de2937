//! Language-agnostic method definitions.
//!
//! This module provides declarative specifications for class methods and
//! the statements in their bodies.

use super::{
    expr::Value,
    types::{TypeRef, Visibility},
};

/// A declarative specification for a class method.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodSpec {
    /// Method name.
    pub name: String,
    /// Parameters.
    pub params: Vec<ParamSpec>,
    /// Declared return type (None when undeclared).
    pub return_type: Option<TypeRef>,
    /// Method body as statements.
    pub body: Vec<Statement>,
    /// Visibility modifier.
    pub visibility: Visibility,
    /// Whether this is a static (class-level) method.
    pub is_static: bool,
}

impl MethodSpec {
    /// Create a new public instance method spec.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            return_type: None,
            body: Vec::new(),
            visibility: Visibility::Public,
            is_static: false,
        }
    }

    /// Add a parameter.
    pub fn param(mut self, param: ParamSpec) -> Self {
        self.params.push(param);
        self
    }

    /// Set return type.
    pub fn returns(mut self, ty: TypeRef) -> Self {
        self.return_type = Some(ty);
        self
    }

    /// Add a statement to the body.
    pub fn statement(mut self, stmt: Statement) -> Self {
        self.body.push(stmt);
        self
    }

    /// Make this a static method.
    pub fn static_(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// Check if this method has a body.
    pub fn has_body(&self) -> bool {
        !self.body.is_empty()
    }
}

/// A method parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamSpec {
    /// Parameter name.
    pub name: String,
    /// Parameter type.
    pub ty: TypeRef,
}

impl ParamSpec {
    /// Create a new required parameter.
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// A statement in a method body.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// Assignment: `target = value`.
    Assign {
        /// Assignment target (a variable or property fetch).
        target: Value,
        /// Assigned value.
        value: Value,
    },
    /// Return statement.
    Return(Value),
}

impl Statement {
    /// Create an assignment statement.
    pub fn assign(target: Value, value: Value) -> Self {
        Self::Assign { target, value }
    }

    /// Create a return statement.
    pub fn return_(value: Value) -> Self {
        Self::Return(value)
    }
}
