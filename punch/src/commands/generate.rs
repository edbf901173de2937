use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use punchcard_codegen::LanguageCodegen;
use punchcard_codegen_php::Generator;
use punchcard_manifest::{MANIFEST_FILE, PunchToml};

use super::UnwrapOrExit;

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to punch.toml (defaults to ./punch.toml)
    #[arg(short, long, default_value = MANIFEST_FILE)]
    pub config: PathBuf,

    /// Output directory (defaults to [output].directory, relative to punch.toml)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let punch_toml = PunchToml::open(&self.config).unwrap_or_exit();
        let generator = Generator::new(punch_toml.manifest());

        if self.dry_run {
            self.run_preview(&generator)
        } else {
            self.run_generation(&generator, &punch_toml)
        }
    }

    fn output_dir(&self, punch_toml: &PunchToml) -> PathBuf {
        match &self.output {
            Some(dir) => dir.clone(),
            None => punch_toml
                .base_dir()
                .join(&punch_toml.manifest().output.directory),
        }
    }

    fn run_generation(&self, generator: &Generator, punch_toml: &PunchToml) -> Result<()> {
        let output_dir = self.output_dir(punch_toml);
        let result = generator
            .generate(&output_dir)
            .wrap_err("Failed to generate code")?;

        println!("Generated: {}/", output_dir.display());

        if !result.written.is_empty() {
            println!();
            println!("Written:");
            for file in &result.written {
                println!("  + {}", file);
            }
        }

        if !result.skipped.is_empty() {
            println!();
            println!("Skipped (already exists):");
            for file in &result.skipped {
                println!("  = {}", file);
            }
        }

        Ok(())
    }

    fn run_preview(&self, generator: &Generator) -> Result<()> {
        let files = generator.preview().wrap_err("Failed to generate code")?;

        for file in &files {
            println!("── {} ──", file.path);
            println!("{}", file.content);
        }

        println!("── Summary ──");
        println!("{} files would be generated", files.len());

        Ok(())
    }
}
