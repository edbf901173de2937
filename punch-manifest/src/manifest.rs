//! Manifest types and parsing for punch.toml files.

use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use punchcard_core::{ParamType, ParameterAndType};
use serde::Deserialize;
use toml::Spanned;

use crate::{Error, Result, validate::ParseContext};

/// Root manifest for punch.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Where and how generated files are written
    #[serde(default)]
    pub output: OutputConfig,

    /// Config classes to generate, in declaration order
    #[serde(default, rename = "class")]
    pub classes: Vec<ClassEntry>,
}

/// The `[output]` table
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// PHP namespace for every generated class
    pub namespace: Option<Spanned<String>>,

    /// Directory generated files are written to
    pub directory: PathBuf,

    /// Replace existing files
    pub overwrite: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            namespace: None,
            directory: PathBuf::from("."),
            overwrite: true,
        }
    }
}

impl OutputConfig {
    /// Namespace without span information.
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_ref().map(|ns| ns.get_ref().as_str())
    }
}

/// A `[[class]]` entry
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClassEntry {
    /// Config file the class is named after (e.g. `config/app.php`)
    pub file: Spanned<String>,

    /// Ordered parameters
    #[serde(default)]
    pub parameters: Vec<ParameterEntry>,
}

impl ClassEntry {
    /// Get the config file name.
    pub fn file(&self) -> &str {
        self.file.get_ref()
    }

    /// Convert the entries into synthesis input, preserving order.
    ///
    /// Type tags that do not parse are kept as class names so that the
    /// synthesis core reports them.
    pub fn parameters(&self) -> Vec<ParameterAndType> {
        self.parameters
            .iter()
            .map(|p| {
                let ty = p
                    .ty
                    .get_ref()
                    .parse::<ParamType>()
                    .unwrap_or_else(|_| ParamType::class(p.ty.get_ref().as_str()));
                ParameterAndType::new(p.name.get_ref().as_str(), ty)
            })
            .collect()
    }
}

/// One `{ name, type }` parameter
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParameterEntry {
    /// Parameter name
    pub name: Spanned<String>,

    /// Type tag: `string`, `int`, `float`, `bool`, `array` or a class name
    #[serde(rename = "type")]
    pub ty: Spanned<String>,
}

impl Manifest {
    /// Parse a punch.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse a punch.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }

    /// Synthesis input for one class entry.
    pub fn parameters(&self, entry: &ClassEntry) -> Vec<ParameterAndType> {
        entry.parameters()
    }
}

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "punch.toml")
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let manifest: Manifest =
        toml::from_str(content).map_err(|e| Error::parse(e, content, filename))?;
    validate_manifest(&manifest, content, filename)?;
    Ok(manifest)
}

/// Validate the manifest after parsing.
fn validate_manifest(manifest: &Manifest, src: &str, filename: &str) -> Result<()> {
    let ctx = ParseContext::new(src, filename);
    ctx.validate_output(&manifest.output)?;
    ctx.validate_classes(&manifest.classes)
}

#[cfg(test)]
mod tests {
    use punchcard_core::ScalarType;

    use super::*;

    const MANIFEST: &str = r#"
[output]
namespace = "App\\Config"
directory = "src/Config"

[[class]]
file = "config/userSettings.php"
parameters = [
    { name = "name", type = "string" },
    { name = "retries", type = "int" },
    { name = "tags", type = "array" },
    { name = "mailer", type = "\\App\\Mailer" },
]

[[class]]
file = "config/app.php"
"#;

    #[test]
    fn test_parse_manifest() {
        let manifest: Manifest = MANIFEST.parse().unwrap();

        assert_eq!(manifest.output.namespace(), Some("App\\Config"));
        assert_eq!(manifest.output.directory, PathBuf::from("src/Config"));
        assert!(manifest.output.overwrite);
        assert_eq!(manifest.classes.len(), 2);
        assert_eq!(manifest.classes[0].file(), "config/userSettings.php");
        assert!(manifest.classes[1].parameters.is_empty());
    }

    #[test]
    fn test_parameters_preserve_order_and_types() {
        let manifest: Manifest = MANIFEST.parse().unwrap();
        let parameters = manifest.parameters(&manifest.classes[0]);

        let names: Vec<&str> = parameters.iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["name", "retries", "tags", "mailer"]);
        assert_eq!(parameters[1].ty(), &ParamType::Scalar(ScalarType::Int));
        assert_eq!(parameters[3].ty(), &ParamType::class("\\App\\Mailer"));
    }

    #[test]
    fn test_output_defaults() {
        let manifest: Manifest = "[[class]]\nfile = \"config/app.php\"\n".parse().unwrap();
        assert_eq!(manifest.output.namespace(), None);
        assert_eq!(manifest.output.directory, PathBuf::from("."));
        assert!(manifest.output.overwrite);
    }

    #[test]
    fn test_empty_manifest() {
        let manifest: Manifest = "".parse().unwrap();
        assert!(manifest.classes.is_empty());
    }

    #[test]
    fn test_from_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = Manifest::from_file(dir.path().join("punch.toml")).unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("punch.toml");
        std::fs::write(&path, MANIFEST).unwrap();

        let manifest = Manifest::from_file(&path).unwrap();
        assert_eq!(manifest.classes.len(), 2);
    }

    #[test]
    fn test_unknown_field_is_parse_error() {
        let err = "[output]\nformat = \"psr4\"\n".parse::<Manifest>().unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_invalid_type() {
        let src = r#"
[[class]]
file = "config/app.php"
parameters = [{ name = "port", type = "uint" }]
"#;
        let err = src.parse::<Manifest>().unwrap_err();
        match *err {
            Error::InvalidType { name, ty, .. } => {
                assert_eq!(name, "port");
                assert_eq!(ty, "uint");
            }
            other => panic!("expected InvalidType, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_identifier() {
        let src = r#"
[[class]]
file = "config/app.php"
parameters = [{ name = "max-size", type = "int" }]
"#;
        let err = src.parse::<Manifest>().unwrap_err();
        assert!(matches!(*err, Error::InvalidIdentifier { ref name, .. } if name == "max-size"));
    }

    #[test]
    fn test_magic_method_name_rejected() {
        let src = r#"
[[class]]
file = "config/app.php"
parameters = [{ name = "__construct", type = "string" }]
"#;
        let err = src.parse::<Manifest>().unwrap_err();
        assert!(matches!(*err, Error::InvalidIdentifier { .. }));
    }

    #[test]
    fn test_duplicate_parameter() {
        let src = r#"
[[class]]
file = "config/app.php"
parameters = [
    { name = "name", type = "string" },
    { name = "name", type = "int" },
]
"#;
        let err = src.parse::<Manifest>().unwrap_err();
        match *err {
            Error::DuplicateParameter { name, class, .. } => {
                assert_eq!(name, "name");
                assert_eq!(class, "AppConfig");
            }
            other => panic!("expected DuplicateParameter, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_parameter_ignores_case() {
        let src = r#"
[[class]]
file = "config/app.php"
parameters = [
    { name = "name", type = "string" },
    { name = "Name", type = "string" },
]
"#;
        let err = src.parse::<Manifest>().unwrap_err();
        match *err {
            Error::DuplicateParameter { name, class, .. } => {
                assert_eq!(name, "Name");
                assert_eq!(class, "AppConfig");
            }
            other => panic!("expected DuplicateParameter, got {:?}", other),
        }
    }

    #[test]
    fn test_generated_method_collision_ignores_case() {
        let src = r#"
[[class]]
file = "config/app.php"
parameters = [{ name = "toarray", type = "bool" }]
"#;
        let err = src.parse::<Manifest>().unwrap_err();
        assert!(matches!(*err, Error::InvalidIdentifier { ref name, .. } if name == "toarray"));
    }

    #[test]
    fn test_this_parameter_rejected() {
        let src = r#"
[[class]]
file = "config/app.php"
parameters = [{ name = "this", type = "int" }]
"#;
        let err = src.parse::<Manifest>().unwrap_err();
        assert!(matches!(*err, Error::InvalidIdentifier { ref name, .. } if name == "this"));
    }

    #[test]
    fn test_duplicate_class_ignores_case() {
        let src = r#"
[[class]]
file = "config/app.php"

[[class]]
file = "legacy/aPP.php"
"#;
        let err = src.parse::<Manifest>().unwrap_err();
        assert!(matches!(*err, Error::DuplicateClass { ref class, .. } if class == "APPConfig"));
    }

    #[test]
    fn test_duplicate_class() {
        let src = r#"
[[class]]
file = "config/app.php"

[[class]]
file = "legacy/app.php"
"#;
        let err = src.parse::<Manifest>().unwrap_err();
        assert!(matches!(*err, Error::DuplicateClass { ref class, .. } if class == "AppConfig"));
    }

    #[test]
    fn test_name_derivation_failure() {
        let err = "[[class]]\nfile = \"app.php\"\n"
            .parse::<Manifest>()
            .unwrap_err();
        assert!(matches!(*err, Error::NameDerivation { ref file, .. } if file == "app.php"));
    }

    #[test]
    fn test_invalid_namespace() {
        let src = "[output]\nnamespace = \"App\\\\\"\n";
        let err = src.parse::<Manifest>().unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));

        let src = "[output]\nnamespace = \"\\\\App\"\n";
        let err = src.parse::<Manifest>().unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));
    }

    #[test]
    fn test_error_span_points_at_value() {
        let src = "[[class]]\nfile = \"config/app.php\"\nparameters = [{ name = \"x\", type = \"uint\" }]\n";
        let err = src.parse::<Manifest>().unwrap_err();
        let Error::InvalidType { span, .. } = *err else {
            panic!("expected InvalidType");
        };
        let text = &src[span.offset()..span.offset() + span.len()];
        assert!(text.contains("uint"));
    }
}
