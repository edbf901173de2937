//! Test utilities for config class descriptors.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.
//!
//! [`ConfigInstance`] interprets the statement IR of a [`ClassSpec`] so the
//! runtime contract of a generated class (fluent setters feeding `toArray`)
//! can be checked without a PHP interpreter. It understands exactly the
//! statements the factories emit.

use eyre::{Result, bail, eyre};
use indexmap::IndexMap;

use crate::{
    builder::{ClassSpec, MethodSpec, Statement, Value},
    factory::{CREATE_METHOD, TO_ARRAY_METHOD},
};

/// A runtime value produced by evaluating the descriptor.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<Literal>),
    Map(IndexMap<String, Literal>),
}

impl From<&str> for Literal {
    fn from(s: &str) -> Self {
        Literal::String(s.to_string())
    }
}

impl From<i64> for Literal {
    fn from(v: i64) -> Self {
        Literal::Int(v)
    }
}

impl From<bool> for Literal {
    fn from(v: bool) -> Self {
        Literal::Bool(v)
    }
}

/// Outcome of running a method body.
enum Returned {
    Nothing,
    This,
    Value(Literal),
}

/// An instance of a config class, evaluated from its descriptor.
#[derive(Debug)]
pub struct ConfigInstance<'a> {
    class: &'a ClassSpec,
    /// Property slots in declaration order; `None` means uninitialized.
    properties: IndexMap<String, Option<Literal>>,
}

impl<'a> ConfigInstance<'a> {
    /// Run the static `create()` method and return the new instance.
    pub fn create(class: &'a ClassSpec) -> Result<Self> {
        let method = class
            .method(CREATE_METHOD)
            .ok_or_else(|| eyre!("class '{}' has no {}() method", class.name, CREATE_METHOD))?;
        if !method.is_static {
            bail!("{}() must be static", CREATE_METHOD);
        }
        match method.body.as_slice() {
            [Statement::Return(Value::New { class: target })] if target == "self" => {}
            _ => bail!("{}() must return a new instance of self", CREATE_METHOD),
        }

        let mut properties = IndexMap::new();
        for property in class.properties() {
            let initial = match &property.default {
                Some(value) => Some(eval_constant(value)?),
                None => None,
            };
            properties.insert(property.name.clone(), initial);
        }

        Ok(Self { class, properties })
    }

    /// Call an instance method that returns `$this`, enabling chains.
    pub fn call(&mut self, name: &str, args: Vec<Literal>) -> Result<&mut Self> {
        let method = self.instance_method(name)?;
        match self.run(method, args)? {
            Returned::This => Ok(self),
            _ => bail!("{}() does not return the receiver", name),
        }
    }

    /// Call `toArray()` and return the exported mapping.
    pub fn to_array(&mut self) -> Result<IndexMap<String, Literal>> {
        let method = self.instance_method(TO_ARRAY_METHOD)?;
        match self.run(method, Vec::new())? {
            Returned::Value(Literal::Map(map)) => Ok(map),
            Returned::Value(Literal::List(list)) if list.is_empty() => Ok(IndexMap::new()),
            _ => bail!("{}() does not return a keyed mapping", TO_ARRAY_METHOD),
        }
    }

    /// Read a property slot directly.
    pub fn property(&self, name: &str) -> Option<&Literal> {
        self.properties.get(name).and_then(Option::as_ref)
    }

    fn instance_method(&self, name: &str) -> Result<&'a MethodSpec> {
        let class: &'a ClassSpec = self.class;
        let method = class
            .method(name)
            .ok_or_else(|| eyre!("class '{}' has no method '{}'", class.name, name))?;
        if method.is_static {
            bail!("{}() is static", name);
        }
        Ok(method)
    }

    fn run(&mut self, method: &MethodSpec, args: Vec<Literal>) -> Result<Returned> {
        if args.len() != method.params.len() {
            bail!(
                "{}() expects {} argument(s), got {}",
                method.name,
                method.params.len(),
                args.len()
            );
        }
        let locals: IndexMap<String, Literal> = method
            .params
            .iter()
            .map(|p| p.name.clone())
            .zip(args)
            .collect();

        for stmt in &method.body {
            match stmt {
                Statement::Assign { target, value } => {
                    let value = self.eval(value, &locals)?;
                    let property = this_property(target)
                        .ok_or_else(|| eyre!("unsupported assignment target {:?}", target))?;
                    let slot = self
                        .properties
                        .get_mut(property)
                        .ok_or_else(|| eyre!("undeclared property '{}'", property))?;
                    *slot = Some(value);
                }
                Statement::Return(Value::This) => return Ok(Returned::This),
                Statement::Return(value) => {
                    return Ok(Returned::Value(self.eval(value, &locals)?));
                }
            }
        }

        Ok(Returned::Nothing)
    }

    fn eval(&self, value: &Value, locals: &IndexMap<String, Literal>) -> Result<Literal> {
        match value {
            Value::Variable(name) => locals
                .get(name)
                .cloned()
                .ok_or_else(|| eyre!("undefined variable ${}", name)),
            Value::PropertyFetch { .. } => {
                let property = this_property(value)
                    .ok_or_else(|| eyre!("unsupported property read {:?}", value))?;
                match self.properties.get(property) {
                    Some(Some(literal)) => Ok(literal.clone()),
                    Some(None) => bail!(
                        "typed property ${} must not be accessed before initialization",
                        property
                    ),
                    None => bail!("undeclared property '{}'", property),
                }
            }
            Value::Array(items) if items.is_empty() => Ok(Literal::List(Vec::new())),
            Value::Array(items) => {
                let mut map = IndexMap::new();
                for item in items {
                    let key = match &item.key {
                        Value::String(key) => key.clone(),
                        other => bail!("unsupported array key {:?}", other),
                    };
                    // Later keys overwrite earlier ones, keeping the first position.
                    map.insert(key, self.eval(&item.value, locals)?);
                }
                Ok(Literal::Map(map))
            }
            other => eval_constant(other),
        }
    }
}

fn this_property(value: &Value) -> Option<&str> {
    match value {
        Value::PropertyFetch { object, property } if **object == Value::This => {
            Some(property.as_str())
        }
        _ => None,
    }
}

fn eval_constant(value: &Value) -> Result<Literal> {
    Ok(match value {
        Value::String(v) => Literal::String(v.clone()),
        Value::Array(items) if items.is_empty() => Literal::List(Vec::new()),
        other => bail!("{:?} is not a constant expression", other),
    })
}
