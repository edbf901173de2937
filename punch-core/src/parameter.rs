//! Parameter values driving config class synthesis.

use std::{fmt, str::FromStr};

use crate::{
    error::ValidationError,
    utils::{is_class_name, is_identifier},
};

/// Scalar types a config parameter can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    String,
    Int,
    Float,
    Bool,
    Array,
}

impl ScalarType {
    /// All scalar types, in the order they are listed in diagnostics.
    pub const ALL: [ScalarType; 5] = [
        ScalarType::String,
        ScalarType::Int,
        ScalarType::Float,
        ScalarType::Bool,
        ScalarType::Array,
    ];

    /// Get the type tag (used in punch.toml and in generated PHP).
    pub fn as_str(&self) -> &'static str {
        match self {
            ScalarType::String => "string",
            ScalarType::Int => "int",
            ScalarType::Float => "float",
            ScalarType::Bool => "bool",
            ScalarType::Array => "array",
        }
    }

    fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ty| ty.as_str() == tag)
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The declared type of a parameter: a scalar or a class reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParamType {
    Scalar(ScalarType),
    /// Class reference such as `DateTimeImmutable` or `\App\Mailer`.
    Class(String),
}

impl ParamType {
    /// Create a class type reference.
    pub fn class(name: impl Into<String>) -> Self {
        Self::Class(name.into())
    }

    /// Check if this is the `array` scalar.
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Scalar(ScalarType::Array))
    }

    /// Get the type name as written in source.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Scalar(scalar) => scalar.as_str(),
            Self::Class(name) => name,
        }
    }
}

impl From<ScalarType> for ParamType {
    fn from(scalar: ScalarType) -> Self {
        Self::Scalar(scalar)
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParamType {
    type Err = ValidationError;

    /// Parse a type tag. Scalar tags win over class names, so `string`
    /// is never treated as a class called `string`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(scalar) = ScalarType::from_tag(s) {
            return Ok(Self::Scalar(scalar));
        }
        if is_class_name(s) {
            return Ok(Self::Class(s.to_string()));
        }
        Err(ValidationError::UnsupportedType { ty: s.to_string() })
    }
}

/// A named, typed parameter: the unit that drives one property and one setter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParameterAndType {
    name: String,
    ty: ParamType,
}

impl ParameterAndType {
    /// Create a parameter. Use [`ParameterAndType::validate`] to check it.
    pub fn new(name: impl Into<String>, ty: impl Into<ParamType>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }

    /// Create a parameter from a type tag, validating both name and tag.
    pub fn parse(name: impl Into<String>, tag: &str) -> Result<Self, ValidationError> {
        let parameter = Self::new(name, tag.parse::<ParamType>()?);
        parameter.validate()?;
        Ok(parameter)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> &ParamType {
        &self.ty
    }

    /// Check that the name is an identifier and the type is well-formed.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if !is_identifier(&self.name) {
            return Err(ValidationError::InvalidName {
                name: self.name.clone(),
            });
        }
        match &self.ty {
            ParamType::Class(class) if !is_class_name(class) => {
                Err(ValidationError::UnsupportedType { ty: class.clone() })
            }
            _ => Ok(()),
        }
    }
}
