use std::path::{Path, PathBuf};

use crate::{Error, Manifest, Result};

/// Default manifest file name.
pub const MANIFEST_FILE: &str = "punch.toml";

/// Represents a punch.toml file with both raw content and parsed manifest.
#[derive(Debug)]
pub struct PunchToml {
    path: PathBuf,
    content: String,
    manifest: Manifest,
}

impl PunchToml {
    /// Open and parse a punch.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let manifest = Manifest::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            manifest,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Directory that relative output paths resolve against.
    pub fn base_dir(&self) -> &Path {
        self.path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
    }
}
