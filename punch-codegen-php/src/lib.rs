//! PHP printer for Punchcard config classes.
//!
//! This crate prints the class descriptors built by `punchcard-codegen` as
//! PHP source files: one `final` class per file, typed private properties,
//! a static `create()`, fluent setters and `toArray()`.
//!
//! # Usage
//!
//! This crate is used internally by the `punch` CLI tool. You typically don't
//! need to use it directly.
//!
//! ```ignore
//! use punchcard_codegen_php::Generator;
//! use punchcard_codegen::LanguageCodegen;
//! use punchcard_manifest::Manifest;
//! use std::path::Path;
//!
//! let manifest = Manifest::from_file("punch.toml")?;
//! let generator = Generator::new(&manifest);
//!
//! // Preview files without writing
//! let files = generator.preview()?;
//!
//! // Generate files to disk
//! let result = generator.generate(Path::new("src/Config"))?;
//! ```

mod class_renderer;
mod generator;
mod php_file;
mod renderer;
mod type_mapper;

pub use class_renderer::PhpClassRenderer;
pub use generator::Generator;
pub use php_file::PhpFile;
pub use punchcard_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
pub use renderer::PhpRenderer;
pub use type_mapper::PhpTypeMapper;
