//! Splitting and joining: split, split_after, fields, lines, join

use crate::helpers::generic_split;
use haven_plugin::prelude::*;

/// Split `operand` on `sep`, dropping the separator.
pub fn split(sep: &str, operand: &str) -> Vec<String> {
    generic_split(operand, sep, false, -1)
}

/// Split `operand` after each `sep`, keeping the separator.
pub fn split_after(sep: &str, operand: &str) -> Vec<String> {
    generic_split(operand, sep, true, -1)
}

/// Like [`split_after`], producing at most `n` pieces.
pub fn split_after_n(sep: &str, n: i64, operand: &str) -> Vec<String> {
    generic_split(operand, sep, true, n)
}

/// Like [`split`], producing at most `n` pieces.
pub fn split_n(sep: &str, n: i64, operand: &str) -> Vec<String> {
    generic_split(operand, sep, false, n)
}

/// Split on runs of whitespace.
pub fn fields(operand: &str) -> Vec<String> {
    operand.split_whitespace().map(str::to_string).collect()
}

/// Split into lines, removing `\n` / `\r\n` terminators.
///
/// Empty lines are kept, but a trailing terminator does not produce a
/// trailing empty line. The scan is in memory and never fails in practice.
pub fn lines(operand: &str) -> Result<Vec<String>, HavenError> {
    let mut out = Vec::new();
    let mut rest = operand;
    while !rest.is_empty() {
        let (line, next) = match rest.find('\n') {
            Some(i) => (&rest[..i], &rest[i + 1..]),
            None => (rest, ""),
        };
        out.push(line.strip_suffix('\r').unwrap_or(line).to_string());
        rest = next;
    }
    Ok(out)
}

pub fn join<S: AsRef<str>>(sep: &str, operand: &[S]) -> String {
    let parts: Vec<&str> = operand.iter().map(AsRef::as_ref).collect();
    parts.join(sep)
}

// ============ Plugins ============

static SPLIT_ARGS: [ArgMeta; 2] = [
    ArgMeta::required("sep", "Text", "Separator"),
    ArgMeta::required("operand", "Text", "Text to split"),
];

static SPLIT_N_ARGS: [ArgMeta; 3] = [
    ArgMeta::required("sep", "Text", "Separator"),
    ArgMeta::required("n", "Int", "Maximum number of pieces (negative = no limit)"),
    ArgMeta::required("operand", "Text", "Text to split"),
];

static OPERAND_ARGS: [ArgMeta; 1] = [ArgMeta::required("operand", "Text", "Text to split")];

static JOIN_ARGS: [ArgMeta; 2] = [
    ArgMeta::required("sep", "Text", "Separator placed between elements"),
    ArgMeta::required("operand", "List<Text>", "Elements to join"),
];

fn call_split(func: &str, args: &[Value], keep_sep: bool) -> Value {
    invoke(|| {
        check_args(func, args, 2, 2)?;
        let sep = require_text(&args[0], func, "sep")?;
        let operand = require_text(&args[1], func, "operand")?;
        Ok(generic_split(operand, sep, keep_sep, -1))
    })
}

fn call_split_n(func: &str, args: &[Value], keep_sep: bool) -> Value {
    invoke(|| {
        check_args(func, args, 3, 3)?;
        let sep = require_text(&args[0], func, "sep")?;
        let n = require_int(&args[1], func, "n")?;
        let operand = require_text(&args[2], func, "operand")?;
        Ok(generic_split(operand, sep, keep_sep, n))
    })
}

pub struct Split;

impl FunctionPlugin for Split {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "Split",
            description: "Split operand on sep, dropping sep",
            usage: "Split sep operand",
            args: &SPLIT_ARGS,
            returns: "List<Text>",
            fallible: false,
            examples: &["\"a,b,c\" | Split \",\" → [a b c]"],
            category: "text/split",
            related: &["SplitN", "SplitAfter", "Join"],
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        call_split("Split", args, false)
    }
}

pub struct SplitAfter;

impl FunctionPlugin for SplitAfter {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "SplitAfter",
            description: "Split operand after each sep, keeping sep",
            usage: "SplitAfter sep operand",
            args: &SPLIT_ARGS,
            returns: "List<Text>",
            fallible: false,
            examples: &["\"a,b,c\" | SplitAfter \",\" → [a, b, c]"],
            category: "text/split",
            related: &["SplitAfterN", "Split"],
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        call_split("SplitAfter", args, true)
    }
}

pub struct SplitAfterN;

impl FunctionPlugin for SplitAfterN {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "SplitAfterN",
            description: "Split operand after each sep into at most n pieces, keeping sep",
            usage: "SplitAfterN sep n operand",
            args: &SPLIT_N_ARGS,
            returns: "List<Text>",
            fallible: false,
            examples: &["\"a,b,c\" | SplitAfterN \",\" 2 → [a, b,c]"],
            category: "text/split",
            related: &["SplitAfter", "SplitN"],
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        call_split_n("SplitAfterN", args, true)
    }
}

pub struct SplitN;

impl FunctionPlugin for SplitN {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "SplitN",
            description: "Split operand on sep into at most n pieces, dropping sep",
            usage: "SplitN sep n operand",
            args: &SPLIT_N_ARGS,
            returns: "List<Text>",
            fallible: false,
            examples: &["\"a,b,c\" | SplitN \",\" 2 → [a b,c]"],
            category: "text/split",
            related: &["Split", "SplitAfterN"],
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        call_split_n("SplitN", args, false)
    }
}

pub struct Fields;

impl FunctionPlugin for Fields {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "Fields",
            description: "Split operand on runs of whitespace",
            usage: "Fields operand",
            args: &OPERAND_ARGS,
            returns: "List<Text>",
            fallible: false,
            examples: &["\"  foo bar  baz   \" | Fields → [foo bar baz]"],
            category: "text/split",
            related: &["Split", "Lines"],
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        invoke(|| {
            check_args("Fields", args, 1, 1)?;
            Ok(fields(require_text(&args[0], "Fields", "operand")?))
        })
    }
}

pub struct Lines;

impl FunctionPlugin for Lines {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "Lines",
            description: "Split operand into lines with end-of-line terminators removed",
            usage: "Lines operand",
            args: &OPERAND_ARGS,
            returns: "List<Text>",
            fallible: true,
            examples: &["\"a\\nb\\r\\nc\\n\" | Lines → [a b c]"],
            category: "text/split",
            related: &["Fields", "Split"],
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        invoke(|| {
            check_args("Lines", args, 1, 1)?;
            lines(require_text(&args[0], "Lines", "operand")?)
        })
    }
}

pub struct Join;

impl FunctionPlugin for Join {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "Join",
            description: "Join the elements of operand with sep",
            usage: "Join sep operand",
            args: &JOIN_ARGS,
            returns: "Text",
            fallible: false,
            examples: &["\"a,b,c\" | Split \",\" | Join \"-\" → \"a-b-c\""],
            category: "text/split",
            related: &["Split"],
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        invoke(|| {
            check_args("Join", args, 2, 2)?;
            let sep = require_text(&args[0], "Join", "sep")?;
            let operand = require_text_list(&args[1], "Join", "operand")?;
            Ok(join(sep, &operand))
        })
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
    fn test_split() {
        assert_eq!(split(",", "a,b,c"), vec!["a", "b", "c"]);
        assert_eq!(split(", ", "a,b,c"), vec!["a,b,c"]);
        assert_eq!(split("", "abc"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_after() {
        assert_eq!(split_after(",", "a,b,c"), vec!["a,", "b,", "c"]);
        assert_eq!(split_after_n(",", 2, "a,b,c"), vec!["a,", "b,c"]);
    }

    #[test]
    fn test_split_n() {
        assert_eq!(split_n(",", 2, "a,b,c"), vec!["a", "b,c"]);
        assert_eq!(split_n(",", -1, "a,b,c"), vec!["a", "b", "c"]);
        assert!(split_n(",", 0, "a,b,c").is_empty());
    }

    #[test]
    fn test_join_split_round_trip() {
        let text = "dogs,cats,horses";
        assert_eq!(join(",", &split(",", text)), text);
        assert_eq!(join("-", &["a", "b", "c"]), "a-b-c");
    }

    #[test]
    fn test_fields() {
        assert_eq!(fields("  foo bar  baz   "), vec!["foo", "bar", "baz"]);
        assert!(fields("   ").is_empty());
    }

    #[test]
    fn test_lines() {
        let cases: Vec<(&str, Vec<&str>)> = vec![
            ("a\nb\nc\n", vec!["a", "b", "c"]),
            ("a few\nwords  \n  on each line\n", vec!["a few", "words  ", "  on each line"]),
            ("single line", vec!["single line"]),
            ("empty\n\nlines", vec!["empty", "", "lines"]),
            ("trailing\n", vec!["trailing"]),
            ("\nleading", vec!["", "leading"]),
            ("windows\r\nlines", vec!["windows", "lines"]),
            ("", vec![]),
        ];
        for (operand, expected) in cases {
            assert_eq!(lines(operand).unwrap(), expected, "operand: {:?}", operand);
        }
    }

    #[test]
    fn test_split_plugin() {
        let args = vec![Value::from(","), Value::from("a,b")];
        let result = Split.call(&args, &eval_ctx());
        assert_eq!(result.as_text_list(), Some(vec!["a", "b"]));
    }

    #[test]
    fn test_split_n_plugin_requires_int() {
        let args = vec![Value::from(","), Value::from("2"), Value::from("a,b")];
        let result = SplitN.call(&args, &eval_ctx());
        assert_eq!(result.as_error().unwrap().kind, ErrorKind::ArgType);
    }

    #[test]
    fn test_join_plugin_null_list() {
        let args = vec![Value::from("-"), Value::Null];
        assert_eq!(Join.call(&args, &eval_ctx()), Value::from(""));
    }

    #[test]
    fn test_lines_plugin() {
        let result = Lines.call(&[Value::from("x\r\ny")], &eval_ctx());
        assert_eq!(result.as_text_list(), Some(vec!["x", "y"]));
    }
}
