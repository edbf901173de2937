use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use punchcard_codegen_php::Generator;
use punchcard_manifest::{MANIFEST_FILE, PunchToml};

use super::UnwrapOrExit;

#[derive(Args)]
pub struct CheckCommand {
    /// Path to punch.toml (defaults to ./punch.toml)
    #[arg(short, long, default_value = MANIFEST_FILE)]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let punch_toml = PunchToml::open(&self.config).unwrap_or_exit();
        let manifest = punch_toml.manifest();

        let classes = Generator::new(manifest)
            .classes()
            .wrap_err("Validation failed")?;

        println!("✓ {} is valid\n", self.config.display());

        if let Some(namespace) = manifest.output.namespace() {
            println!("  namespace {}", namespace);
        }
        println!("  output {}\n", manifest.output.directory.display());

        let count = classes.len();
        println!("  {} class{}:", count, if count == 1 { "" } else { "es" });
        for (class, entry) in classes.iter().zip(&manifest.classes) {
            let parameters: Vec<String> = entry
                .parameters()
                .iter()
                .map(|p| format!("{}: {}", p.name(), p.ty()))
                .collect();
            println!("    {} ({})", class.name, entry.file());
            if !parameters.is_empty() {
                println!("      {}", parameters.join(", "));
            }
        }

        Ok(())
    }
}
