//! Text transformation: case conversion, trimming, repetition, replacement

use crate::helpers::is_word_separator;
use haven_plugin::prelude::*;

/// Title-case the first letter of each word.
pub fn title(operand: &str) -> String {
    let mut out = String::with_capacity(operand.len());
    let mut prev = ' ';
    for c in operand.chars() {
        if is_word_separator(prev) {
            out.push(to_title_char(c));
        } else {
            out.push(c);
        }
        prev = c;
    }
    out
}

/// Simple (one-to-one) titlecase mapping.
///
/// Differs from uppercase for the Latin digraphs and the Greek letters with
/// iota subscript. Characters whose uppercase form expands to several
/// characters (`ß`, `ﬁ`) are left unchanged.
fn to_title_char(c: char) -> char {
    let mapped = match c {
        '\u{01C4}'..='\u{01C6}' => Some('\u{01C5}'),
        '\u{01C7}'..='\u{01C9}' => Some('\u{01C8}'),
        '\u{01CA}'..='\u{01CC}' => Some('\u{01CB}'),
        '\u{01F1}'..='\u{01F3}' => Some('\u{01F2}'),
        '\u{1F80}'..='\u{1F87}' | '\u{1F90}'..='\u{1F97}' | '\u{1FA0}'..='\u{1FA7}' => {
            char::from_u32(u32::from(c) + 8)
        }
        '\u{1FB3}' => Some('\u{1FBC}'),
        '\u{1FC3}' => Some('\u{1FCC}'),
        '\u{1FF3}' => Some('\u{1FFC}'),
        _ => None,
    };
    if let Some(t) = mapped {
        return t;
    }
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

pub fn to_lower(operand: &str) -> String {
    operand.to_lowercase()
}

pub fn to_upper(operand: &str) -> String {
    operand.to_uppercase()
}

/// `operand` repeated `count` times.
///
/// # Panics
///
/// Panics if `count` is negative.
pub fn repeat(count: i64, operand: &str) -> String {
    assert!(count >= 0, "Repeat count cannot be negative: {}", count);
    operand.repeat(count as usize)
}

/// Replace the first `n` occurrences of `old` with `new`; `n < 0` replaces
/// all of them. An empty `old` matches before every character and at the end.
pub fn replace(old: &str, new: &str, n: i64, operand: &str) -> String {
    if n < 0 {
        operand.replace(old, new)
    } else {
        operand.replacen(old, new, n as usize)
    }
}

/// Strip any of `chars` from both ends.
pub fn trim(chars: &str, operand: &str) -> String {
    operand.trim_matches(|c: char| chars.contains(c)).to_string()
}

pub fn trim_left(chars: &str, operand: &str) -> String {
    operand.trim_start_matches(|c: char| chars.contains(c)).to_string()
}

pub fn trim_right(chars: &str, operand: &str) -> String {
    operand.trim_end_matches(|c: char| chars.contains(c)).to_string()
}

/// Remove `prefix` once, if present.
pub fn trim_prefix(prefix: &str, operand: &str) -> String {
    operand.strip_prefix(prefix).unwrap_or(operand).to_string()
}

/// Remove `suffix` once, if present.
pub fn trim_suffix(suffix: &str, operand: &str) -> String {
    operand.strip_suffix(suffix).unwrap_or(operand).to_string()
}

pub fn trim_space(operand: &str) -> String {
    operand.trim().to_string()
}

// ============ Plugins ============

static OPERAND_ARGS: [ArgMeta; 1] = [ArgMeta::required("operand", "Text", "Text to transform")];

static CHARS_ARGS: [ArgMeta; 2] = [
    ArgMeta::required("chars", "Text", "Set of characters to strip"),
    ArgMeta::required("operand", "Text", "Text to trim"),
];

static PREFIX_ARGS: [ArgMeta; 2] = [
    ArgMeta::required("prefix", "Text", "Prefix to remove"),
    ArgMeta::required("operand", "Text", "Text to trim"),
];

static SUFFIX_ARGS: [ArgMeta; 2] = [
    ArgMeta::required("suffix", "Text", "Suffix to remove"),
    ArgMeta::required("operand", "Text", "Text to trim"),
];

static REPEAT_ARGS: [ArgMeta; 2] = [
    ArgMeta::required("count", "Int", "Number of repetitions (must not be negative)"),
    ArgMeta::required("operand", "Text", "Text to repeat"),
];

static REPLACE_ARGS: [ArgMeta; 4] = [
    ArgMeta::required("old", "Text", "Substring to replace"),
    ArgMeta::required("new", "Text", "Replacement"),
    ArgMeta::required("n", "Int", "Maximum replacements (negative = all)"),
    ArgMeta::required("operand", "Text", "Source text"),
];

fn call_unary(func: &str, args: &[Value], f: fn(&str) -> String) -> Value {
    invoke(|| {
        check_args(func, args, 1, 1)?;
        Ok(f(require_text(&args[0], func, "operand")?))
    })
}

fn call_binary(func: &str, first: &str, args: &[Value], f: fn(&str, &str) -> String) -> Value {
    invoke(|| {
        check_args(func, args, 2, 2)?;
        let a = require_text(&args[0], func, first)?;
        let operand = require_text(&args[1], func, "operand")?;
        Ok(f(a, operand))
    })
}

pub struct Title;

impl FunctionPlugin for Title {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "Title",
            description: "Uppercase the first letter of each word in operand",
            usage: "Title operand",
            args: &OPERAND_ARGS,
            returns: "Text",
            fallible: false,
            examples: &["\"her royal highness\" | Title → \"Her Royal Highness\""],
            category: "text/transform",
            related: &["ToUpper", "ToLower"],
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        call_unary("Title", args, title)
    }
}

pub struct ToLower;

impl FunctionPlugin for ToLower {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "ToLower",
            description: "Convert operand to lowercase",
            usage: "ToLower operand",
            args: &OPERAND_ARGS,
            returns: "Text",
            fallible: false,
            examples: &["\"Gopher\" | ToLower → \"gopher\""],
            category: "text/transform",
            related: &["ToUpper", "Title"],
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        call_unary("ToLower", args, to_lower)
    }
}

pub struct ToUpper;

impl FunctionPlugin for ToUpper {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "ToUpper",
            description: "Convert operand to uppercase",
            usage: "ToUpper operand",
            args: &OPERAND_ARGS,
            returns: "Text",
            fallible: false,
            examples: &["\"Gopher\" | ToUpper → \"GOPHER\""],
            category: "text/transform",
            related: &["ToLower", "Title"],
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        call_unary("ToUpper", args, to_upper)
    }
}

pub struct Repeat;

impl FunctionPlugin for Repeat {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "Repeat",
            description: "Repeat operand count times",
            usage: "Repeat count operand",
            args: &REPEAT_ARGS,
            returns: "Text",
            fallible: false,
            examples: &["\"na\" | Repeat 2 → \"nana\""],
            category: "text/transform",
            related: &["Replace"],
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        invoke(|| {
            check_args("Repeat", args, 2, 2)?;
            let count = require_int(&args[0], "Repeat", "count")?;
            let operand = require_text(&args[1], "Repeat", "operand")?;
            Ok(repeat(count, operand))
        })
    }
}

pub struct Replace;

impl FunctionPlugin for Replace {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "Replace",
            description: "Replace the first n occurrences of old with new (n < 0 replaces all)",
            usage: "Replace old new n operand",
            args: &REPLACE_ARGS,
            returns: "Text",
            fallible: false,
            examples: &[
                "\"oink oink oink\" | Replace \"k\" \"ky\" 2 → \"oinky oinky oink\"",
                "\"oink oink oink\" | Replace \"oink\" \"moo\" -1 → \"moo moo moo\"",
            ],
            category: "text/transform",
            related: &["Repeat", "TrimPrefix"],
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        invoke(|| {
            check_args("Replace", args, 4, 4)?;
            let old = require_text(&args[0], "Replace", "old")?;
            let new = require_text(&args[1], "Replace", "new")?;
            let n = require_int(&args[2], "Replace", "n")?;
            let operand = require_text(&args[3], "Replace", "operand")?;
            Ok(replace(old, new, n, operand))
        })
    }
}

pub struct Trim;

impl FunctionPlugin for Trim {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "Trim",
            description: "Remove any of chars from both ends of operand",
            usage: "Trim chars operand",
            args: &CHARS_ARGS,
            returns: "Text",
            fallible: false,
            examples: &["\"¡¡¡Hello, Gophers!!!\" | Trim \"!¡\" → \"Hello, Gophers\""],
            category: "text/transform",
            related: &["TrimLeft", "TrimRight", "TrimSpace"],
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        call_binary("Trim", "chars", args, trim)
    }
}

pub struct TrimLeft;

impl FunctionPlugin for TrimLeft {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "TrimLeft",
            description: "Remove any of chars from the beginning of operand",
            usage: "TrimLeft chars operand",
            args: &CHARS_ARGS,
            returns: "Text",
            fallible: false,
            examples: &["\"xxhixx\" | TrimLeft \"x\" → \"hixx\""],
            category: "text/transform",
            related: &["Trim", "TrimPrefix"],
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        call_binary("TrimLeft", "chars", args, trim_left)
    }
}

pub struct TrimRight;

impl FunctionPlugin for TrimRight {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "TrimRight",
            description: "Remove any of chars from the end of operand",
            usage: "TrimRight chars operand",
            args: &CHARS_ARGS,
            returns: "Text",
            fallible: false,
            examples: &["\"xxhixx\" | TrimRight \"x\" → \"xxhi\""],
            category: "text/transform",
            related: &["Trim", "TrimSuffix"],
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        call_binary("TrimRight", "chars", args, trim_right)
    }
}

pub struct TrimPrefix;

impl FunctionPlugin for TrimPrefix {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "TrimPrefix",
            description: "Remove prefix from the beginning of operand",
            usage: "TrimPrefix prefix operand",
            args: &PREFIX_ARGS,
            returns: "Text",
            fallible: false,
            examples: &["\"xxhi\" | TrimPrefix \"x\" → \"xhi\""],
            category: "text/transform",
            related: &["TrimSuffix", "HasPrefix"],
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        call_binary("TrimPrefix", "prefix", args, trim_prefix)
    }
}

pub struct TrimSuffix;

impl FunctionPlugin for TrimSuffix {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "TrimSuffix",
            description: "Remove suffix from the end of operand",
            usage: "TrimSuffix suffix operand",
            args: &SUFFIX_ARGS,
            returns: "Text",
            fallible: false,
            examples: &["\"photo.jpg\" | TrimSuffix \".jpg\" → \"photo\""],
            category: "text/transform",
            related: &["TrimPrefix", "HasSuffix"],
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        call_binary("TrimSuffix", "suffix", args, trim_suffix)
    }
}

pub struct TrimSpace;

impl FunctionPlugin for TrimSpace {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "TrimSpace",
            description: "Remove leading and trailing whitespace from operand",
            usage: "TrimSpace operand",
            args: &OPERAND_ARGS,
            returns: "Text",
            fallible: false,
            examples: &["\" \\t hello \\n\" | TrimSpace → \"hello\""],
            category: "text/transform",
            related: &["Trim"],
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        call_unary("TrimSpace", args, trim_space)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn eval_ctx() -> EvalContext {
        EvalContext::new(Arc::new(PluginRegistry::new()))
    }

    #[test]
    fn test_title() {
        assert_eq!(title("her royal highness"), "Her Royal Highness");
        assert_eq!(title("hello-world foo_bar"), "Hello-World Foo_bar");
        assert_eq!(title("élan vital"), "Élan Vital");
        assert_eq!(title(""), "");
    }

    #[test]
    fn test_title_uses_titlecase_forms() {
        assert_eq!(title("ǆungla ǉubav"), "ǅungla ǈubav");
        assert_eq!(title("Ǳ"), "ǲ");
        assert_eq!(title("ᾳ"), "ᾼ");
        assert_eq!(title("ßa ﬁx"), "ßa ﬁx");
    }

    #[test]
    fn test_case_conversion() {
        assert_eq!(to_lower("Gopher ÄÖ"), "gopher äö");
        assert_eq!(to_upper("Gopher äö"), "GOPHER ÄÖ");
    }

    #[test]
    fn test_repeat() {
        assert_eq!(repeat(2, "na"), "nana");
        assert_eq!(repeat(0, "na"), "");
    }

    #[test]
    #[should_panic(expected = "negative")]
    fn test_repeat_negative_panics() {
        repeat(-1, "na");
    }

    #[test]
    fn test_replace() {
        assert_eq!(replace("k", "ky", 2, "oink oink oink"), "oinky oinky oink");
        assert_eq!(replace("oink", "moo", -1, "oink oink oink"), "moo moo moo");
        assert_eq!(replace("oink", "moo", 0, "oink"), "oink");
        assert_eq!(replace("", "-", -1, "ab"), "-a-b-");
        assert_eq!(replace("", "-", 2, "abc"), "-a-bc");
    }

    #[test]
    fn test_trims() {
        assert_eq!(trim("!¡", "¡¡¡Hello, Gophers!!!"), "Hello, Gophers");
        assert_eq!(trim_left("x", "xxhixx"), "hixx");
        assert_eq!(trim_right("x", "xxhixx"), "xxhi");
        assert_eq!(trim("", "xx"), "xx");
        assert_eq!(trim_prefix("x", "xxhi"), "xhi");
        assert_eq!(trim_suffix(".jpg", "photo.jpg"), "photo");
        assert_eq!(trim_suffix(".png", "photo.jpg"), "photo.jpg");
        assert_eq!(trim_space(" \t hello \n"), "hello");
    }

    #[test]
    fn test_replace_plugin() {
        let args = vec![
            Value::from("a"),
            Value::from("b"),
            Value::Int(-1),
            Value::from("banana"),
        ];
        assert_eq!(Replace.call(&args, &eval_ctx()), Value::from("bbnbnb"));
    }

    #[test]
    fn test_unary_plugin_propagates_error() {
        let upstream = HavenError::invalid_encoding("bad");
        let result = ToUpper.call(&[Value::Error(upstream.clone())], &eval_ctx());
        assert_eq!(result, Value::Error(upstream));
    }
}
