//! Integer arithmetic
//!
//! Binary operations take the modifier first and the operand last, so
//! `Subtract a operand` computes `operand - a`. Overflow wraps.

use haven_plugin::prelude::*;

pub fn abs(operand: i64) -> i64 {
    operand.wrapping_abs()
}

pub fn add(a: i64, operand: i64) -> i64 {
    operand.wrapping_add(a)
}

pub fn subtract(a: i64, operand: i64) -> i64 {
    operand.wrapping_sub(a)
}

pub fn multiply(a: i64, operand: i64) -> i64 {
    operand.wrapping_mul(a)
}

/// `operand / a`, truncating toward zero.
///
/// # Panics
///
/// Panics if `a` is zero.
pub fn divide(a: i64, operand: i64) -> i64 {
    assert!(a != 0, "Divide by zero: {} / 0", operand);
    operand.wrapping_div(a)
}

/// `operand % a`; the sign follows `operand`.
///
/// # Panics
///
/// Panics if `a` is zero.
pub fn modulo(a: i64, operand: i64) -> i64 {
    assert!(a != 0, "Modulo by zero: {} % 0", operand);
    operand.wrapping_rem(a)
}

pub fn min(a: i64, operand: i64) -> i64 {
    a.min(operand)
}

pub fn max(a: i64, operand: i64) -> i64 {
    a.max(operand)
}

// ============ Plugins ============

static UNARY_ARGS: [ArgMeta; 1] = [ArgMeta::required("operand", "Int", "Integer")];

static BINARY_ARGS: [ArgMeta; 2] = [
    ArgMeta::required("a", "Int", "Modifier"),
    ArgMeta::required("operand", "Int", "Integer operated on"),
];

static DIVISOR_ARGS: [ArgMeta; 2] = [
    ArgMeta::required("a", "Int", "Divisor; must not be zero"),
    ArgMeta::required("operand", "Int", "Dividend"),
];

fn call_binary(func: &str, args: &[Value], f: fn(i64, i64) -> i64) -> Value {
    invoke(|| {
        check_args(func, args, 2, 2)?;
        let a = require_int(&args[0], func, "a")?;
        let operand = require_int(&args[1], func, "operand")?;
        Ok(f(a, operand))
    })
}

pub struct Abs;

impl FunctionPlugin for Abs {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "Abs",
            description: "Absolute value of operand",
            usage: "Abs operand",
            args: &UNARY_ARGS,
            returns: "Int",
            fallible: false,
            examples: &["-3 | Abs → 3"],
            category: "math",
            related: &["Max", "Min"],
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        invoke(|| {
            check_args("Abs", args, 1, 1)?;
            Ok(abs(require_int(&args[0], "Abs", "operand")?))
        })
    }
}

pub struct Add;

impl FunctionPlugin for Add {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "Add",
            description: "operand + a",
            usage: "Add a operand",
            args: &BINARY_ARGS,
            returns: "Int",
            fallible: false,
            examples: &["3 | Add 2 → 5"],
            category: "math",
            related: &["Subtract"],
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        call_binary("Add", args, add)
    }
}

pub struct Subtract;

impl FunctionPlugin for Subtract {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "Subtract",
            description: "operand - a",
            usage: "Subtract a operand",
            args: &BINARY_ARGS,
            returns: "Int",
            fallible: false,
            examples: &["3 | Subtract 2 → 1"],
            category: "math",
            related: &["Add"],
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        call_binary("Subtract", args, subtract)
    }
}

pub struct Multiply;

impl FunctionPlugin for Multiply {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "Multiply",
            description: "operand * a",
            usage: "Multiply a operand",
            args: &BINARY_ARGS,
            returns: "Int",
            fallible: false,
            examples: &["3 | Multiply 2 → 6"],
            category: "math",
            related: &["Divide"],
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        call_binary("Multiply", args, multiply)
    }
}

pub struct Divide;

impl FunctionPlugin for Divide {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "Divide",
            description: "operand / a, truncated toward zero",
            usage: "Divide a operand",
            args: &DIVISOR_ARGS,
            returns: "Int",
            fallible: false,
            examples: &["7 | Divide 2 → 3", "-7 | Divide 2 → -3"],
            category: "math",
            related: &["Modulo", "Multiply"],
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        call_binary("Divide", args, divide)
    }
}

pub struct Modulo;

impl FunctionPlugin for Modulo {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "Modulo",
            description: "Remainder of operand / a",
            usage: "Modulo a operand",
            args: &DIVISOR_ARGS,
            returns: "Int",
            fallible: false,
            examples: &["7 | Modulo 3 → 1", "-7 | Modulo 3 → -1"],
            category: "math",
            related: &["Divide"],
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        call_binary("Modulo", args, modulo)
    }
}

pub struct Min;

impl FunctionPlugin for Min {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "Min",
            description: "Smaller of a and operand",
            usage: "Min a operand",
            args: &BINARY_ARGS,
            returns: "Int",
            fallible: false,
            examples: &["3 | Min 2 → 2"],
            category: "math",
            related: &["Max"],
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        call_binary("Min", args, min)
    }
}

pub struct Max;

impl FunctionPlugin for Max {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "Max",
            description: "Larger of a and operand",
            usage: "Max a operand",
            args: &BINARY_ARGS,
            returns: "Int",
            fallible: false,
            examples: &["3 | Max 2 → 3"],
            category: "math",
            related: &["Min"],
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        call_binary("Max", args, max)
    }
}
