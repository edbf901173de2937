//! The `toArray` export method.

use punchcard_core::ParameterAndType;

use crate::builder::{ArrayItem, MethodSpec, Statement, TypeRef, Value};

/// Name of the generated export method.
pub const TO_ARRAY_METHOD: &str = "toArray";

/// Builds the method exporting every property into a keyed mapping.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToArrayMethodFactory;

impl ToArrayMethodFactory {
    pub fn new() -> Self {
        Self
    }

    /// Create `toArray()`, returning `['name' => $this->name, ...]` in
    /// parameter order. Values are live property reads at call time.
    pub fn create(&self, parameters: &[ParameterAndType]) -> MethodSpec {
        let items = parameters.iter().map(|parameter| {
            ArrayItem::new(
                Value::string(parameter.name()),
                Value::this_property(parameter.name()),
            )
        });

        MethodSpec::new(TO_ARRAY_METHOD)
            .returns(TypeRef::array())
            .statement(Statement::return_(Value::array(items)))
    }
}
