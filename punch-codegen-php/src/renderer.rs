//! PHP-specific renderer for language-agnostic expressions.
//!
//! This module implements the [`Renderer`] trait for PHP, translating
//! [`Value`] and [`Statement`] into valid PHP syntax.

use punchcard_codegen::builder::{ArrayItem, Renderer, Statement, Value};

/// PHP language renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhpRenderer;

impl PhpRenderer {
    /// Create a new PHP renderer.
    pub fn new() -> Self {
        Self
    }

    fn render_array_item(&self, item: &ArrayItem) -> String {
        format!(
            "{} => {}",
            self.render_value(&item.key),
            self.render_value(&item.value)
        )
    }
}

/// Quote a string as a single-quoted PHP literal.
fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        if c == '\\' || c == '\'' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('\'');
    out
}

impl Renderer for PhpRenderer {
    fn render_value(&self, value: &Value) -> String {
        match value {
            Value::String(v) => quote(v),
            Value::Variable(name) => format!("${}", name),
            Value::This => "$this".to_string(),
            Value::PropertyFetch { object, property } => {
                format!("{}->{}", self.render_value(object), property)
            }
            Value::New { class } => format!("new {}()", class),
            Value::Array(items) => {
                let items: Vec<String> =
                    items.iter().map(|i| self.render_array_item(i)).collect();
                format!("[{}]", items.join(", "))
            }
        }
    }

    fn render_statement(&self, stmt: &Statement) -> String {
        match stmt {
            Statement::Assign { target, value } => format!(
                "{} = {};",
                self.render_value(target),
                self.render_value(value)
            ),
            Statement::Return(value) => format!("return {};", self.render_value(value)),
        }
    }
}
