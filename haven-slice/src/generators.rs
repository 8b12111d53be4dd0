//! Numeric sequence generator: Seq

use haven_plugin::prelude::*;

/// Integers from `first` towards `last` (inclusive) in increments of `step`.
///
/// `step` holds at most one value and defaults to 1. The last value may fall
/// short of `last` when the step does not divide the range, and the
/// sequence ends early rather than overflowing `i64`.
///
/// # Panics
///
/// Panics if more than one step is given or the step is zero.
pub fn seq(first: i64, last: i64, step: &[i64]) -> Vec<i64> {
    assert!(step.len() <= 1, "Seq accepts at most one step, got {}", step.len());
    let step = step.first().copied().unwrap_or(1);
    assert!(step != 0, "Seq step cannot be zero");

    let mut out = Vec::new();
    let mut current = Some(first);
    while let Some(n) = current {
        if (step > 0 && n > last) || (step < 0 && n < last) {
            break;
        }
        out.push(n);
        current = n.checked_add(step);
    }
    out
}

// ============ Plugins ============

static SEQ_ARGS: [ArgMeta; 3] = [
    ArgMeta::required("first", "Int", "First value"),
    ArgMeta::required("last", "Int", "Inclusive bound"),
    ArgMeta::optional("step", "Int", "Increment; must not be zero", "1"),
];

pub struct Seq;

impl FunctionPlugin for Seq {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "Seq",
            description: "Integers from first to last (inclusive) by step",
            usage: "Seq first last [step]",
            args: &SEQ_ARGS,
            returns: "List<Int>",
            fallible: false,
            examples: &["Seq 0 5 → [0 1 2 3 4 5]", "Seq 3 13 3 → [3 6 9 12]", "Seq 4 0 -1 → [4 3 2 1 0]"],
            category: "slice/generate",
            related: &["Head", "Slice"],
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        invoke(|| {
            check_args("Seq", args, 2, usize::MAX)?;
            let first = require_int(&args[0], "Seq", "first")?;
            let last = require_int(&args[1], "Seq", "last")?;
            let step = args[2..]
                .iter()
                .map(|v| require_int(v, "Seq", "step"))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(seq(first, last, &step))
        })
    }
}
