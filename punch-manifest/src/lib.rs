//! punch.toml parsing and validation.
//!
//! A manifest lists the config classes to generate and where to write them.
//! Every error carries the manifest source so it renders as a `miette`
//! diagnostic pointing at the offending value.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod file;
mod manifest;
mod validate;

pub use error::{Error, Result};
pub use file::{MANIFEST_FILE, PunchToml};
pub use manifest::{ClassEntry, Manifest, OutputConfig, ParameterEntry, parse_manifest};
pub use validate::ParseContext;
