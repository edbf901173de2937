//! Typed property declarations, one per parameter.

use punchcard_core::ParameterAndType;

use crate::builder::{PropertySpec, TypeRef, Value};

/// Builds the private property block of a config class.
#[derive(Debug, Clone, Copy, Default)]
pub struct PropertyFactory;

impl PropertyFactory {
    pub fn new() -> Self {
        Self
    }

    /// Create one private property per parameter, in input order.
    ///
    /// Duplicate names are passed through unchanged.
    pub fn create_properties(&self, parameters: &[ParameterAndType]) -> Vec<PropertySpec> {
        parameters.iter().map(|p| self.create(p)).collect()
    }

    /// Create the property for a single parameter.
    ///
    /// `array` properties default to `[]` and are annotated as `string[]`.
    /// The element type is fixed: it is not derived from the parameter.
    pub fn create(&self, parameter: &ParameterAndType) -> PropertySpec {
        let property = PropertySpec::new(parameter.name(), TypeRef::from(parameter.ty()));

        if parameter.ty().is_array() {
            return property
                .default(Value::empty_array())
                .doc_type(TypeRef::array_of(TypeRef::string()));
        }

        property
    }
}
