//! Parsing text into booleans and numbers

use haven_plugin::prelude::*;

/// Accepts `1 t T TRUE true True` and `0 f F FALSE false False`.
pub fn parse_bool(operand: &str) -> Result<bool, HavenError> {
    match operand {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(HavenError::malformed_boolean(operand)),
    }
}

/// Parse a 32-bit integer, detecting the base from its prefix.
///
/// `0x`/`0X` is hexadecimal, `0o`/`0O` or a bare leading `0` octal and
/// `0b`/`0B` binary; anything else is decimal. Underscores may separate
/// digits only when a prefix is present.
pub fn parse_int(operand: &str) -> Result<i64, HavenError> {
    let malformed = |details: &str| HavenError::malformed_number(operand, details);

    let (negative, unsigned) = match operand.as_bytes().first() {
        Some(b'-') => (true, &operand[1..]),
        Some(b'+') => (false, &operand[1..]),
        _ => (false, operand),
    };

    let lower = unsigned.get(..2).map(str::to_ascii_lowercase);
    let (radix, digits, prefixed) = match lower.as_deref() {
        Some("0x") => (16, &unsigned[2..], true),
        Some("0o") => (8, &unsigned[2..], true),
        Some("0b") => (2, &unsigned[2..], true),
        _ if unsigned.len() > 1 && unsigned.starts_with('0') => (8, &unsigned[1..], true),
        _ => (10, unsigned, false),
    };

    let digits = if prefixed {
        strip_underscores(digits).ok_or_else(|| malformed("misplaced digit separator"))?
    } else {
        digits.to_string()
    };
    if digits.is_empty() || !digits.bytes().all(|b| (b as char).is_digit(radix)) {
        return Err(malformed("invalid syntax"));
    }

    let magnitude = i64::from_str_radix(&digits, radix).map_err(|_| malformed("value out of range"))?;
    let value = if negative { -magnitude } else { magnitude };
    if value < i64::from(i32::MIN) || value > i64::from(i32::MAX) {
        return Err(malformed("value out of range"));
    }
    Ok(value)
}

/// Remove `_` separators. Each must sit between two digits, or directly
/// after the base prefix.
fn strip_underscores(digits: &str) -> Option<String> {
    if digits.ends_with('_') || digits.contains("__") {
        return None;
    }
    Some(digits.replace('_', ""))
}

/// Parse a 64-bit float: decimal or scientific notation, hexadecimal
/// with a binary exponent (`0x1.8p3`), or `inf`, `infinity` and `nan` in
/// any case.
pub fn parse_float(operand: &str) -> Result<f64, HavenError> {
    let value = match parse_hex_float(operand) {
        Some(parsed) => parsed.ok_or_else(|| HavenError::malformed_number(operand, "invalid hexadecimal float"))?,
        None => operand
            .parse()
            .map_err(|e: std::num::ParseFloatError| HavenError::malformed_number(operand, e.to_string()))?,
    };
    if value.is_infinite() && !is_infinity_literal(operand) {
        return Err(HavenError::malformed_number(operand, "value out of range"));
    }
    Ok(value)
}

/// `None` when `operand` has no hex prefix, `Some(None)` when the hex form
/// is malformed. The `p` exponent is mandatory.
fn parse_hex_float(operand: &str) -> Option<Option<f64>> {
    let (negative, unsigned) = match operand.as_bytes().first() {
        Some(b'-') => (true, &operand[1..]),
        Some(b'+') => (false, &operand[1..]),
        _ => (false, operand),
    };
    let body = unsigned.strip_prefix("0x").or_else(|| unsigned.strip_prefix("0X"))?;
    Some(hex_float_body(body).map(|v| if negative { -v } else { v }))
}

fn hex_float_body(body: &str) -> Option<f64> {
    let (mantissa, exponent) = body.split_once(['p', 'P'])?;
    let exponent: i32 = match exponent.strip_prefix('+') {
        Some(rest) if !rest.starts_with(['+', '-']) => rest.parse().ok()?,
        Some(_) => return None,
        None => exponent.parse().ok()?,
    };
    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }

    let mut value = 0f64;
    for c in int_part.chars().chain(frac_part.chars()) {
        value = value * 16.0 + f64::from(c.to_digit(16)?);
    }
    let frac_bits = i32::try_from(frac_part.len()).ok()?.checked_mul(4)?;
    let mut scale = exponent.saturating_sub(frac_bits);
    // Apply the exponent in steps so intermediate powers stay finite.
    while scale != 0 {
        let step = scale.clamp(-1000, 1000);
        value *= 2f64.powi(step);
        scale -= step;
    }
    Some(value)
}

fn is_infinity_literal(operand: &str) -> bool {
    let unsigned = operand.trim_start_matches(['+', '-']);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

// ============ Plugins ============

static BOOL_ARGS: [ArgMeta; 1] = [ArgMeta::required("operand", "Text", "Boolean text")];
static INT_ARGS: [ArgMeta; 1] = [ArgMeta::required("operand", "Text", "Integer text")];
static FLOAT_ARGS: [ArgMeta; 1] = [ArgMeta::required("operand", "Text", "Number text")];

pub struct ParseBool;

impl FunctionPlugin for ParseBool {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "ParseBool",
            description: "Parse operand as a boolean",
            usage: "ParseBool operand",
            args: &BOOL_ARGS,
            returns: "Bool",
            fallible: true,
            examples: &["\"T\" | ParseBool → true", "\"0\" | ParseBool → false"],
            category: "parse",
            related: &["ParseInt"],
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        invoke(|| {
            check_args("ParseBool", args, 1, 1)?;
            parse_bool(require_text(&args[0], "ParseBool", "operand")?)
        })
    }
}

pub struct ParseInt;

impl FunctionPlugin for ParseInt {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "ParseInt",
            description: "Parse operand as a 32-bit integer, base detected from its prefix",
            usage: "ParseInt operand",
            args: &INT_ARGS,
            returns: "Int",
            fallible: true,
            examples: &["\"42\" | ParseInt → 42", "\"0x1F\" | ParseInt → 31", "\"0b1_01\" | ParseInt → 5"],
            category: "parse",
            related: &["ParseFloat"],
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        invoke(|| {
            check_args("ParseInt", args, 1, 1)?;
            parse_int(require_text(&args[0], "ParseInt", "operand")?)
        })
    }
}

pub struct ParseFloat;

impl FunctionPlugin for ParseFloat {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "ParseFloat",
            description: "Parse operand as a 64-bit floating point number",
            usage: "ParseFloat operand",
            args: &FLOAT_ARGS,
            returns: "Float",
            fallible: true,
            examples: &["\"3.25\" | ParseFloat → 3.25", "\"1e3\" | ParseFloat → 1000"],
            category: "parse",
            related: &["ParseInt"],
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        invoke(|| {
            check_args("ParseFloat", args, 1, 1)?;
            parse_float(require_text(&args[0], "ParseFloat", "operand")?)
        })
    }
}
