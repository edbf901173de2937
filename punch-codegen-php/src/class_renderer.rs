//! PHP implementation of ClassRenderer for class descriptors.
//!
//! # PHP Mapping
//!
//! - `ClassSpec` → `final class Name` with the brace on its own line
//! - `PropertySpec` → typed property, preceded by a `@var` docblock when annotated
//! - `MethodSpec` → method with the brace on the next line
//! - `Member::Nop` → one blank line

use punchcard_codegen::builder::{
    ClassRenderer, ClassSpec, CodeBuilder, CodeFragment, Member, MethodSpec, PropertySpec,
    Renderer, TypeMapper, Visibility,
};

use crate::{renderer::PhpRenderer, type_mapper::PhpTypeMapper};

/// PHP implementation of ClassRenderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhpClassRenderer {
    type_mapper: PhpTypeMapper,
    renderer: PhpRenderer,
}

impl PhpClassRenderer {
    /// Create a new PHP class renderer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Render a class as code fragments, for embedding in a file.
    pub fn class_fragments(&self, spec: &ClassSpec) -> Vec<CodeFragment> {
        let header = if spec.is_final {
            format!("final class {}", spec.name)
        } else {
            format!("class {}", spec.name)
        };

        let body = spec
            .members
            .iter()
            .flat_map(|member| match member {
                Member::Property(p) => self.render_property(p),
                Member::Method(m) => self.render_method(m),
                Member::Nop => vec![CodeFragment::Blank],
            })
            .collect();

        vec![
            CodeFragment::line(header),
            CodeFragment::block("{", body, Some("}".to_string())),
        ]
    }

    fn render_signature(&self, spec: &MethodSpec) -> String {
        let params: Vec<String> = spec
            .params
            .iter()
            .map(|p| format!("{} ${}", self.type_mapper.render_type(&p.ty), p.name))
            .collect();

        let mut signature = String::from(self.render_visibility(spec.visibility));
        if spec.is_static {
            signature.push_str(" static");
        }
        signature.push_str(&format!(" function {}({})", spec.name, params.join(", ")));
        if let Some(ty) = &spec.return_type {
            signature.push_str(": ");
            signature.push_str(&self.type_mapper.render_type(ty));
        }
        signature
    }
}

impl ClassRenderer for PhpClassRenderer {
    fn render_class(&self, spec: &ClassSpec) -> String {
        let mut builder = CodeBuilder::php();
        for fragment in self.class_fragments(spec) {
            builder.apply_fragment(fragment);
        }
        builder.build()
    }

    fn render_property(&self, spec: &PropertySpec) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();

        if let Some(doc_type) = &spec.doc_type {
            fragments.push(CodeFragment::line("/**"));
            fragments.push(CodeFragment::line(format!(
                " * @var {}",
                self.type_mapper.render_doc_type(doc_type)
            )));
            fragments.push(CodeFragment::line(" */"));
        }

        let mut declaration = format!(
            "{} {} ${}",
            self.render_visibility(spec.visibility),
            self.type_mapper.render_type(&spec.ty),
            spec.name
        );
        if let Some(default) = &spec.default {
            declaration.push_str(" = ");
            declaration.push_str(&self.renderer.render_value(default));
        }
        declaration.push(';');
        fragments.push(CodeFragment::line(declaration));

        fragments
    }

    fn render_method(&self, spec: &MethodSpec) -> Vec<CodeFragment> {
        let body = spec
            .body
            .iter()
            .map(|stmt| CodeFragment::line(self.renderer.render_statement(stmt)))
            .collect();

        vec![
            CodeFragment::line(self.render_signature(spec)),
            CodeFragment::block("{", body, Some("}".to_string())),
        ]
    }

    fn render_visibility(&self, vis: Visibility) -> &'static str {
        match vis {
            Visibility::Public => "public",
            Visibility::Private => "private",
        }
    }
}

#[cfg(test)]
mod tests {
    use punchcard_codegen::builder::{ParamSpec, Statement, TypeRef, Value};

    use super::*;

    #[test]
    fn test_render_property() {
        let r = PhpClassRenderer::new();
        let fragments = r.render_property(&PropertySpec::new("name", TypeRef::string()));
        assert_eq!(fragments, vec![CodeFragment::line("private string $name;")]);
    }

    #[test]
    fn test_render_annotated_property() {
        let r = PhpClassRenderer::new();
        let property = PropertySpec::new("tags", TypeRef::array())
            .default(Value::empty_array())
            .doc_type(TypeRef::array_of(TypeRef::string()));

        assert_eq!(
            r.render_property(&property),
            vec![
                CodeFragment::line("/**"),
                CodeFragment::line(" * @var string[]"),
                CodeFragment::line(" */"),
                CodeFragment::line("private array $tags = [];"),
            ]
        );
    }

    #[test]
    fn test_render_static_method_without_return_type() {
        let r = PhpClassRenderer::new();
        let method = MethodSpec::new("create")
            .static_()
            .statement(Statement::return_(Value::new_instance("self")));

        let mut builder = CodeBuilder::php();
        for fragment in r.render_method(&method) {
            builder.apply_fragment(fragment);
        }
        assert_eq!(
            builder.build(),
            "public static function create()\n{\n    return new self();\n}\n"
        );
    }

    #[test]
    fn test_render_setter_signature() {
        let r = PhpClassRenderer::new();
        let method = MethodSpec::new("timeout")
            .param(ParamSpec::new("timeout", TypeRef::scalar(punchcard_core::ScalarType::Float)))
            .returns(TypeRef::self_type());

        assert_eq!(
            r.render_signature(&method),
            "public function timeout(float $timeout): self"
        );
    }

    #[test]
    fn test_render_class_with_blank_markers() {
        let r = PhpClassRenderer::new();
        let class = ClassSpec::new("AppConfig")
            .final_()
            .member(PropertySpec::new("a", TypeRef::string()).into())
            .member(Member::Nop)
            .member(PropertySpec::new("b", TypeRef::string()).into());

        assert_eq!(
            r.render_class(&class),
            "final class AppConfig\n{\n    private string $a;\n\n    private string $b;\n}\n"
        );
    }

    #[test]
    fn test_render_empty_non_final_class() {
        let r = PhpClassRenderer::new();
        assert_eq!(r.render_class(&ClassSpec::new("Empty")), "class Empty\n{\n}\n");
    }

    #[test]
    fn test_render_visibility() {
        let r = PhpClassRenderer::new();
        assert_eq!(r.render_visibility(Visibility::Public), "public");
        assert_eq!(r.render_visibility(Visibility::Private), "private");
    }
}
