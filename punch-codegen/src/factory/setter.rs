//! Fluent setter methods.

use punchcard_core::ParameterAndType;

use crate::builder::{MethodSpec, ParamSpec, Statement, TypeRef, Value};

/// Builds one fluent setter per parameter.
#[derive(Debug, Clone, Copy, Default)]
pub struct SetterMethodFactory;

impl SetterMethodFactory {
    pub fn new() -> Self {
        Self
    }

    /// Create the setter for a single parameter.
    ///
    /// The method is named exactly like the parameter, assigns its single
    /// argument to the same-named property and returns `$this`.
    pub fn create(&self, parameter: &ParameterAndType) -> MethodSpec {
        let name = parameter.name();

        MethodSpec::new(name)
            .param(ParamSpec::new(name, TypeRef::from(parameter.ty())))
            .returns(TypeRef::self_type())
            .statement(Statement::assign(
                Value::this_property(name),
                Value::variable(name),
            ))
            .statement(Statement::return_(Value::This))
    }
}
