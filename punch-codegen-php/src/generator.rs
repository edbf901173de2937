//! PHP config class generator.

use std::path::Path;

use eyre::{Result, WrapErr};
use punchcard_codegen::{
    builder::ClassSpec,
    factory::ConfigClassFactory,
    language::{GenerateResult, LanguageCodegen, PreviewFile},
};
use punchcard_core::{File, Overwrite, WriteResult};
use punchcard_manifest::Manifest;

use crate::php_file::PhpFile;

/// PHP code generator that produces one config class file per manifest entry.
pub struct Generator<'a> {
    manifest: &'a Manifest,
    factory: ConfigClassFactory,
}

impl LanguageCodegen for Generator<'_> {
    fn language(&self) -> &'static str {
        "php"
    }

    fn file_extension(&self) -> &'static str {
        "php"
    }

    fn preview(&self) -> Result<Vec<PreviewFile>> {
        self.preview_files()
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        self.generate_files(output_dir)
    }
}

impl<'a> Generator<'a> {
    pub fn new(manifest: &'a Manifest) -> Self {
        Self {
            manifest,
            factory: ConfigClassFactory::new(),
        }
    }

    /// Synthesize the class descriptors, in manifest order.
    pub fn classes(&self) -> Result<Vec<ClassSpec>> {
        self.manifest
            .classes
            .iter()
            .map(|entry| {
                self.factory
                    .create_class_from_parameter_names(&entry.parameters(), entry.file())
                    .wrap_err_with(|| format!("failed to synthesize class for '{}'", entry.file()))
            })
            .collect()
    }

    /// Preview generated files without writing to disk.
    fn preview_files(&self) -> Result<Vec<PreviewFile>> {
        let namespace = self.manifest.output.namespace();

        Ok(self
            .classes()?
            .iter()
            .map(|class| PreviewFile {
                path: format!("{}.{}", class.name, self.file_extension()),
                content: PhpFile::new(class).namespace(namespace).render(),
            })
            .collect())
    }

    /// Generate all files into the specified output directory.
    fn generate_files(&self, output_dir: &Path) -> Result<GenerateResult> {
        let overwrite = if self.manifest.output.overwrite {
            Overwrite::Always
        } else {
            Overwrite::IfMissing
        };

        let mut result = GenerateResult::default();
        for preview in self.preview_files()? {
            let file = File::new(output_dir.join(&preview.path), preview.content).overwrite(overwrite);
            match file.write()? {
                WriteResult::Written => result.written.push(preview.path),
                WriteResult::Skipped => result.skipped.push(preview.path),
            }
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = r#"
[[class]]
file = "config/app.php"
parameters = [{ name = "debug", type = "bool" }]

[[class]]
file = "config/mail.php"
"#;

    #[test]
    fn test_preview_paths_follow_manifest_order() {
        let manifest: Manifest = MANIFEST.parse().unwrap();
        let files = Generator::new(&manifest).preview().unwrap();

        let paths: Vec<&str> = files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, vec!["AppConfig.php", "MailConfig.php"]);
    }

    #[test]
    fn test_generate_writes_files() {
        let manifest: Manifest = MANIFEST.parse().unwrap();
        let dir = tempfile::tempdir().unwrap();

        let result = Generator::new(&manifest).generate(dir.path()).unwrap();

        assert_eq!(result.written, vec!["AppConfig.php", "MailConfig.php"]);
        assert!(result.skipped.is_empty());
        let content = std::fs::read_to_string(dir.path().join("AppConfig.php")).unwrap();
        assert!(content.contains("public function debug(bool $debug): self"));
    }

    #[test]
    fn test_generate_keeps_existing_files_when_overwrite_disabled() {
        let src = format!("[output]\noverwrite = false\n{}", MANIFEST);
        let manifest: Manifest = src.parse().unwrap();
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("AppConfig.php"), "<?php // edited\n").unwrap();

        let result = Generator::new(&manifest).generate(dir.path()).unwrap();

        assert_eq!(result.written, vec!["MailConfig.php"]);
        assert_eq!(result.skipped, vec!["AppConfig.php"]);
        let content = std::fs::read_to_string(dir.path().join("AppConfig.php")).unwrap();
        assert_eq!(content, "<?php // edited\n");
    }

    #[test]
    fn test_generate_overwrites_by_default() {
        let manifest: Manifest = MANIFEST.parse().unwrap();
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("AppConfig.php"), "stale").unwrap();

        let result = Generator::new(&manifest).generate(dir.path()).unwrap();

        assert!(result.skipped.is_empty());
        let content = std::fs::read_to_string(dir.path().join("AppConfig.php")).unwrap();
        assert!(content.starts_with("<?php\n"));
    }

    #[test]
    fn test_language() {
        let manifest: Manifest = "".parse().unwrap();
        let generator = Generator::new(&manifest);
        assert_eq!(generator.language(), "php");
        assert_eq!(generator.file_extension(), "php");
        assert!(generator.preview().unwrap().is_empty());
    }
}
