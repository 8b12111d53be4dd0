//! Plugin traits

use crate::EvalContext;
use haven_core::Value;
use serde::Serialize;

/// Metadata about a function argument
#[derive(Debug, Clone, Serialize)]
pub struct ArgMeta {
    pub name: &'static str,
    pub typ: &'static str,
    pub description: &'static str,
    pub optional: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<&'static str>,
}

impl ArgMeta {
    pub const fn required(name: &'static str, typ: &'static str, description: &'static str) -> Self {
        Self { name, typ, description, optional: false, default: None }
    }

    pub const fn optional(name: &'static str, typ: &'static str, description: &'static str, default: &'static str) -> Self {
        Self { name, typ, description, optional: true, default: Some(default) }
    }
}

/// Metadata for a function plugin
#[derive(Debug, Clone, Serialize)]
pub struct FunctionMeta {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    /// Parameters in call order; the operand, if any, is last
    pub args: &'static [ArgMeta],
    pub returns: &'static str,
    /// Whether the function reports failure through an error value
    pub fallible: bool,
    pub examples: &'static [&'static str],
    pub category: &'static str,
    pub related: &'static [&'static str],
}

impl FunctionMeta {
    pub fn signature(&self) -> Signature {
        Signature {
            name: self.name,
            params: self.args.iter().map(|a| a.name).collect(),
            variadic: self.args.iter().any(|a| a.optional),
            returns: self.returns,
            fallible: self.fallible,
        }
    }
}

/// Calling convention of a registered function, as seen by templates
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Signature {
    pub name: &'static str,
    pub params: Vec<&'static str>,
    pub variadic: bool,
    pub returns: &'static str,
    pub fallible: bool,
}

/// Pure function plugin
pub trait FunctionPlugin: Send + Sync {
    fn meta(&self) -> FunctionMeta;
    fn call(&self, args: &[Value], ctx: &EvalContext) -> Value;
}
