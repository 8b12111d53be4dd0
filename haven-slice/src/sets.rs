//! Set operations over sequences: Intersect, Union
//!
//! Duplicates are collapsed. Callers must treat the result as a set; this
//! implementation happens to keep first-seen order.

use haven_plugin::prelude::*;
use std::collections::HashSet;

/// Distinct elements of `operand` that also occur in `a`, in `operand` order.
pub fn intersect<A: AsRef<str>, B: AsRef<str>>(a: &[A], operand: &[B]) -> Vec<String> {
    let wanted: HashSet<&str> = a.iter().map(AsRef::as_ref).collect();
    let mut seen = HashSet::with_capacity(wanted.len().min(operand.len()));
    operand
        .iter()
        .map(AsRef::as_ref)
        .filter(|s| wanted.contains(s) && seen.insert(*s))
        .map(str::to_string)
        .collect()
}

/// Distinct elements of either sequence: `a` first, then new ones from `operand`.
pub fn union<A: AsRef<str>, B: AsRef<str>>(a: &[A], operand: &[B]) -> Vec<String> {
    let mut seen = HashSet::with_capacity(a.len().max(operand.len()));
    a.iter()
        .map(AsRef::as_ref)
        .chain(operand.iter().map(AsRef::as_ref))
        .filter(|s| seen.insert(*s))
        .map(str::to_string)
        .collect()
}

// ============ Plugins ============

static SET_ARGS: [ArgMeta; 2] = [
    ArgMeta::required("a", "List<Text>", "First set"),
    ArgMeta::required("operand", "List<Text>", "Second set"),
];

fn call_set(func: &str, args: &[Value], f: fn(&[String], &[String]) -> Vec<String>) -> Value {
    invoke(|| {
        check_args(func, args, 2, 2)?;
        let a = require_text_list(&args[0], func, "a")?;
        let operand = require_text_list(&args[1], func, "operand")?;
        Ok(f(&a, &operand))
    })
}

pub struct Intersect;

impl FunctionPlugin for Intersect {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "Intersect",
            description: "Distinct elements present in both a and operand (order unspecified)",
            usage: "Intersect a operand",
            args: &SET_ARGS,
            returns: "List<Text>",
            fallible: false,
            examples: &["[b c d] | Intersect [a b c] → [b c]"],
            category: "slice/set",
            related: &["Union"],
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        call_set("Intersect", args, intersect)
    }
}

pub struct Union;

impl FunctionPlugin for Union {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "Union",
            description: "Distinct elements present in a or operand (order unspecified)",
            usage: "Union a operand",
            args: &SET_ARGS,
            returns: "List<Text>",
            fallible: false,
            examples: &["[b c d] | Union [a b] → [a b c d]"],
            category: "slice/set",
            related: &["Intersect"],
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        call_set("Union", args, union)
    }
}
