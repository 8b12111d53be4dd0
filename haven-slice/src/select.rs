//! Selecting elements: Head, Tail, Slice, Grep

use crate::helpers::{call_count_seq, clamp_count};
use haven_plugin::prelude::*;

/// First `n` elements. `n <= 0` yields nothing; `n >= len` yields everything.
pub fn head<T: Clone>(n: i64, operand: &[T]) -> Vec<T> {
    operand[..clamp_count(n, operand.len())].to_vec()
}

/// Last `n` elements. `n <= 0` yields nothing; `n >= len` yields everything.
pub fn tail<T: Clone>(n: i64, operand: &[T]) -> Vec<T> {
    let k = clamp_count(n, operand.len());
    operand[operand.len() - k..].to_vec()
}

/// Half-open sub-range `[first, last)`.
///
/// # Panics
///
/// Panics unless `0 <= first <= last <= operand.len()`.
pub fn slice<T: Clone>(first: i64, last: i64, operand: &[T]) -> Vec<T> {
    let in_range = 0 <= first
        && first <= last
        && usize::try_from(last).map_or(false, |last| last <= operand.len());
    assert!(
        in_range,
        "Slice bounds out of range [{}:{}] with length {}",
        first,
        last,
        operand.len()
    );
    operand[first as usize..last as usize].to_vec()
}

/// Elements matching `pattern`, in their original order.
pub fn grep<S: AsRef<str>>(pattern: &str, operand: &[S]) -> Result<Vec<String>, HavenError> {
    let pattern = Pattern::compile(pattern)?;
    Ok(grep_compiled(&pattern, operand))
}

pub fn grep_compiled<S: AsRef<str>>(pattern: &Pattern, operand: &[S]) -> Vec<String> {
    operand
        .iter()
        .map(AsRef::as_ref)
        .filter(|s| pattern.is_match(s))
        .map(str::to_string)
        .collect()
}

// ============ Plugins ============

static COUNT_ARGS: [ArgMeta; 2] = [
    ArgMeta::required("n", "Int", "Number of elements"),
    ArgMeta::required("operand", "List<Text>", "Source sequence"),
];

static SLICE_ARGS: [ArgMeta; 3] = [
    ArgMeta::required("first", "Int", "Start index (inclusive)"),
    ArgMeta::required("last", "Int", "End index (exclusive)"),
    ArgMeta::required("operand", "List<Text>", "Source sequence"),
];

static GREP_ARGS: [ArgMeta; 2] = [
    ArgMeta::required("pattern", "Text|Pattern", "Regular expression"),
    ArgMeta::required("operand", "List<Text>", "Sequence to filter"),
];

pub struct Head;

impl FunctionPlugin for Head {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "Head",
            description: "First n elements of operand",
            usage: "Head n operand",
            args: &COUNT_ARGS,
            returns: "List<Text>",
            fallible: false,
            examples: &["[a b c] | Head 2 → [a b]", "[a b c] | Head 10 → [a b c]"],
            category: "slice/select",
            related: &["Tail", "Slice"],
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        call_count_seq("Head", args, head)
    }
}

pub struct Tail;

impl FunctionPlugin for Tail {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "Tail",
            description: "Last n elements of operand",
            usage: "Tail n operand",
            args: &COUNT_ARGS,
            returns: "List<Text>",
            fallible: false,
            examples: &["[a b c] | Tail 2 → [b c]"],
            category: "slice/select",
            related: &["Head", "Slice"],
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        call_count_seq("Tail", args, tail)
    }
}

pub struct Slice;

impl FunctionPlugin for Slice {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "Slice",
            description: "Elements first (inclusive) to last (exclusive); indices must be in range",
            usage: "Slice first last operand",
            args: &SLICE_ARGS,
            returns: "List<Text>",
            fallible: false,
            examples: &["[a b c d] | Slice 1 3 → [b c]"],
            category: "slice/select",
            related: &["Head", "Tail"],
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        invoke(|| {
            check_args("Slice", args, 3, 3)?;
            let first = require_int(&args[0], "Slice", "first")?;
            let last = require_int(&args[1], "Slice", "last")?;
            let operand = require_text_list(&args[2], "Slice", "operand")?;
            Ok(slice(first, last, &operand))
        })
    }
}

pub struct Grep;

impl FunctionPlugin for Grep {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "Grep",
            description: "Elements of operand matching pattern, in order",
            usage: "Grep pattern operand",
            args: &GREP_ARGS,
            returns: "List<Text>",
            fallible: true,
            examples: &["[dog cat deer] | Grep \"^d\" → [dog deer]"],
            category: "slice/select",
            related: &["Matches", "CompileRegex"],
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        invoke(|| {
            check_args("Grep", args, 2, 2)?;
            let operand = require_text_list(&args[1], "Grep", "operand")?;
            match &args[0] {
                Value::Pattern(p) => Ok(grep_compiled(p, &operand)),
                other => grep(require_text(other, "Grep", "pattern")?, &operand),
            }
        })
    }
}
