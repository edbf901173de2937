use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for punch.toml operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("create a punch.toml with at least one [[class]] entry"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse punch.toml")]
    #[diagnostic(code(punch::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid type '{ty}' for parameter '{name}'")]
    #[diagnostic(
        code(punch::invalid_type),
        help("valid types are: string, int, float, bool, array, or a class name like '\\App\\Mailer'")
    )]
    InvalidType {
        #[source_code]
        src: NamedSource<String>,
        #[label("unknown type")]
        span: SourceSpan,
        name: String,
        ty: String,
    },

    #[error("invalid {context} name '{name}'")]
    #[diagnostic(
        code(punch::invalid_identifier),
        help("{reason}. Use only letters, numbers, and underscores, starting with a letter or underscore.")
    )]
    InvalidIdentifier {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid identifier")]
        span: SourceSpan,
        name: String,
        context: String,
        reason: String,
    },

    #[error("duplicate parameter '{name}' in {class}")]
    #[diagnostic(
        code(punch::duplicate_parameter),
        help("each parameter becomes a setter and PHP method names ignore case, so names must differ by more than case")
    )]
    DuplicateParameter {
        #[source_code]
        src: NamedSource<String>,
        #[label("first declared here")]
        first_span: SourceSpan,
        #[label("declared again here")]
        second_span: SourceSpan,
        name: String,
        class: String,
    },

    #[error("duplicate class '{class}'")]
    #[diagnostic(
        code(punch::duplicate_class),
        help("both files derive the same class name (PHP class names ignore case); rename one of them")
    )]
    DuplicateClass {
        #[source_code]
        src: NamedSource<String>,
        #[label("first derived here")]
        first_span: SourceSpan,
        #[label("derived again here")]
        second_span: SourceSpan,
        class: String,
    },

    #[error("cannot derive a class name from '{file}'")]
    #[diagnostic(
        code(punch::name_derivation),
        help("use a path with an identifier file name, e.g. 'config/userSettings.php'")
    )]
    NameDerivation {
        #[source_code]
        src: NamedSource<String>,
        #[label("no '/<name>.php' segment")]
        span: SourceSpan,
        file: String,
    },

    #[error("{message}")]
    #[diagnostic(code(punch::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },
}

impl Error {
    /// Create a parse error from a toml error with source context
    pub fn parse(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }
}
