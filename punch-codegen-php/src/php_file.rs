//! PhpFile abstraction for generated PHP source files.

use punchcard_codegen::builder::{ClassSpec, CodeBuilder, CodeFragment, Renderable};

use crate::class_renderer::PhpClassRenderer;

/// A PHP file holding a single class.
///
/// Renders the open tag, a strict types declaration, an optional namespace
/// and the class, separated by blank lines.
///
/// # Example
///
/// ```ignore
/// let content = PhpFile::new(&class)
///     .namespace(Some("App\\Config"))
///     .render();
/// ```
pub struct PhpFile<'a> {
    namespace: Option<String>,
    class: &'a ClassSpec,
    renderer: PhpClassRenderer,
}

impl<'a> PhpFile<'a> {
    /// Create a file for the given class, without a namespace.
    pub fn new(class: &'a ClassSpec) -> Self {
        Self {
            namespace: None,
            class,
            renderer: PhpClassRenderer::new(),
        }
    }

    /// Set the namespace declaration.
    pub fn namespace(mut self, namespace: Option<&str>) -> Self {
        self.namespace = namespace.map(str::to_string);
        self
    }

    /// Render the file with PHP indentation (4 spaces).
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::php();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for PhpFile<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = vec![
            CodeFragment::line("<?php"),
            CodeFragment::blank(),
            CodeFragment::line("declare(strict_types=1);"),
            CodeFragment::blank(),
        ];

        if let Some(namespace) = &self.namespace {
            fragments.push(CodeFragment::line(format!("namespace {};", namespace)));
            fragments.push(CodeFragment::blank());
        }

        fragments.extend(self.renderer.class_fragments(self.class));
        fragments
    }
}
