//! Validation of punch.toml entries

use std::{collections::HashMap, ops::Range};

use miette::{NamedSource, SourceSpan};
use punchcard_codegen::{
    factory::{CREATE_METHOD, TO_ARRAY_METHOD},
    naming::derive_class_name,
};
use punchcard_core::{ParamType, is_class_name, is_identifier};
use toml::Spanned;

use crate::{ClassEntry, Error, OutputConfig, Result};

/// Parsing and validation context that carries source information.
///
/// Encapsulates the raw TOML source and filename so that validation errors
/// can point at the offending span.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "punch.toml");
/// ctx.validate_class(&entry)?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    /// The raw TOML source content
    src: &'a str,
    /// The filename for error reporting
    filename: &'a str,
}

impl<'a> ParseContext<'a> {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &'a str, filename: &'a str) -> Self {
        Self { src, filename }
    }

    /// Get the source content.
    pub fn src(&self) -> &'a str {
        self.src
    }

    /// Get the filename.
    pub fn filename(&self) -> &'a str {
        self.filename
    }

    fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(self.filename, self.src.to_string())
    }

    /// Validate the `[output]` table.
    pub fn validate_output(&self, output: &OutputConfig) -> Result<()> {
        if let Some(namespace) = &output.namespace {
            let name = namespace.get_ref();
            if name.starts_with('\\') || !is_class_name(name) {
                return Err(Box::new(Error::Validation {
                    src: self.named_source(),
                    span: Some(span_of(namespace.span())),
                    message: format!("invalid namespace '{}'", name),
                }));
            }
        }
        Ok(())
    }

    /// Validate one `[[class]]` entry and return its derived class name.
    pub fn validate_class(&self, entry: &ClassEntry) -> Result<String> {
        let class = derive_class_name(entry.file.get_ref()).map_err(|e| {
            Box::new(Error::NameDerivation {
                src: self.named_source(),
                span: span_of(entry.file.span()),
                file: e.file_name,
            })
        })?;

        // PHP method names are case-insensitive
        let mut seen: HashMap<String, Range<usize>> = HashMap::new();
        for parameter in &entry.parameters {
            let name = parameter.name.get_ref();

            if let Some(reason) = validate_identifier(name) {
                return Err(Box::new(Error::InvalidIdentifier {
                    src: self.named_source(),
                    span: span_of(parameter.name.span()),
                    name: name.clone(),
                    context: format!("parameter in '{}'", class),
                    reason: reason.to_string(),
                }));
            }

            if parameter.ty.get_ref().parse::<ParamType>().is_err() {
                return Err(Box::new(Error::InvalidType {
                    src: self.named_source(),
                    span: span_of(parameter.ty.span()),
                    name: name.clone(),
                    ty: parameter.ty.get_ref().clone(),
                }));
            }

            let key = name.to_ascii_lowercase();
            if let Some(first) = seen.get(&key) {
                return Err(Box::new(Error::DuplicateParameter {
                    src: self.named_source(),
                    first_span: span_of(first.clone()),
                    second_span: span_of(parameter.name.span()),
                    name: name.clone(),
                    class,
                }));
            }
            seen.insert(key, parameter.name.span());
        }

        Ok(class)
    }

    /// Validate all entries, rejecting files that derive the same class.
    pub fn validate_classes(&self, entries: &[ClassEntry]) -> Result<()> {
        // PHP class names are case-insensitive
        let mut seen: HashMap<String, &Spanned<String>> = HashMap::new();
        for entry in entries {
            let class = self.validate_class(entry)?;
            let key = class.to_ascii_lowercase();
            if let Some(first) = seen.get(&key) {
                return Err(Box::new(Error::DuplicateClass {
                    src: self.named_source(),
                    first_span: span_of(first.span()),
                    second_span: span_of(entry.file.span()),
                    class,
                }));
            }
            seen.insert(key, &entry.file);
        }
        Ok(())
    }
}

fn span_of(range: Range<usize>) -> SourceSpan {
    SourceSpan::from(range)
}

/// Validate that a name can be used as a property, setter and argument name.
/// Returns None if valid, Some(reason) if invalid
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    if name.is_empty() {
        return Some("name cannot be empty");
    }

    if !is_identifier(name) {
        return Some(
            if name.starts_with(|c: char| c.is_ascii_alphabetic() || c == '_') {
                "name must contain only letters, numbers, and underscores"
            } else {
                "name must start with a letter or underscore"
            },
        );
    }

    if name.starts_with("__") {
        return Some("names starting with '__' are reserved for PHP magic methods");
    }

    // The setter argument shares the parameter name; variables are case-sensitive
    if name == "this" {
        return Some("'$this' cannot be used as a parameter");
    }

    if [CREATE_METHOD, TO_ARRAY_METHOD]
        .iter()
        .any(|method| method.eq_ignore_ascii_case(name))
    {
        return Some("name collides with a generated method");
    }

    None
}
