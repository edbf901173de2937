use miette::Diagnostic;
use thiserror::Error;

/// Errors raised while synthesizing a config class.
///
/// Both kinds are raised before any member is built; there is never a
/// partially assembled class.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum Error {
    #[error("invalid parameter at position {index}")]
    #[diagnostic(code(punch::validation))]
    Validation {
        index: usize,
        #[source]
        source: ValidationError,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    NameDerivation(#[from] NameDerivationError),
}

impl Error {
    /// Create a validation error for the parameter at `index`.
    pub fn validation(index: usize, source: ValidationError) -> Self {
        Error::Validation { index, source }
    }
}

/// A parameter that is not a well-formed name/type pair.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ValidationError {
    #[error("parameter name is empty")]
    #[diagnostic(code(punch::empty_name))]
    EmptyName,

    #[error("invalid parameter name '{name}'")]
    #[diagnostic(
        code(punch::invalid_name),
        help("use only letters, numbers, and underscores, starting with a letter or underscore")
    )]
    InvalidName { name: String },

    #[error("unsupported type '{ty}'")]
    #[diagnostic(
        code(punch::invalid_type),
        help("valid types are: string, int, float, bool, array, or a class name")
    )]
    UnsupportedType { ty: String },
}

/// A file name without an extractable `/<name>.php` segment.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("cannot derive a class name from '{file_name}'")]
#[diagnostic(
    code(punch::name_derivation),
    help("the file name must contain a path segment like 'config/userSettings.php'")
)]
pub struct NameDerivationError {
    pub file_name: String,
}

impl NameDerivationError {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
        }
    }
}
