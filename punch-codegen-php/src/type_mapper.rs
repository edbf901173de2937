//! PHP type mapper implementation.

use punchcard_codegen::builder::TypeMapper;
use punchcard_core::ScalarType;

/// PHP type mapper.
///
/// Native declarations use PHP's scalar types; typed collections are only
/// expressible in doc annotations, so they collapse to `array` in code.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhpTypeMapper;

impl TypeMapper for PhpTypeMapper {
    fn map_scalar(&self, ty: ScalarType) -> String {
        match ty {
            ScalarType::String => "string",
            ScalarType::Int => "int",
            ScalarType::Float => "float",
            ScalarType::Bool => "bool",
            ScalarType::Array => "array",
        }
        .to_string()
    }

    fn map_self(&self) -> String {
        "self".to_string()
    }

    fn map_array_of(&self, _inner: &str) -> String {
        "array".to_string()
    }
}
