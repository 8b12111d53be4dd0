//! Text search functions: containment, affix tests, counting, indexing.
//!
//! Indices are byte offsets into the operand; `-1` means "not found".

use haven_plugin::prelude::*;

/// Reports whether `substr` is within `operand`.
pub fn contains(substr: &str, operand: &str) -> bool {
    operand.contains(substr)
}

/// Reports whether any character of `chars` is within `operand`.
pub fn contains_any(chars: &str, operand: &str) -> bool {
    operand.contains(|c: char| chars.contains(c))
}

/// Number of non-overlapping occurrences of `substr` in `operand`.
/// An empty `substr` matches at every character boundary.
pub fn count(substr: &str, operand: &str) -> i64 {
    if substr.is_empty() {
        return operand.chars().count() as i64 + 1;
    }
    operand.matches(substr).count() as i64
}

pub fn has_prefix(prefix: &str, operand: &str) -> bool {
    operand.starts_with(prefix)
}

pub fn has_suffix(suffix: &str, operand: &str) -> bool {
    operand.ends_with(suffix)
}

pub fn index(substr: &str, operand: &str) -> i64 {
    to_index(operand.find(substr))
}

pub fn index_any(chars: &str, operand: &str) -> i64 {
    to_index(operand.find(|c: char| chars.contains(c)))
}

pub fn last_index(substr: &str, operand: &str) -> i64 {
    to_index(operand.rfind(substr))
}

pub fn last_index_any(chars: &str, operand: &str) -> i64 {
    to_index(operand.rfind(|c: char| chars.contains(c)))
}

fn to_index(pos: Option<usize>) -> i64 {
    pos.map_or(-1, |i| i as i64)
}

// ============ Plugins ============

static SUBSTR_ARGS: [ArgMeta; 2] = [
    ArgMeta::required("substr", "Text", "Substring to look for"),
    ArgMeta::required("operand", "Text", "Text to search"),
];

static CHARS_ARGS: [ArgMeta; 2] = [
    ArgMeta::required("chars", "Text", "Set of characters to look for"),
    ArgMeta::required("operand", "Text", "Text to search"),
];

static PREFIX_ARGS: [ArgMeta; 2] = [
    ArgMeta::required("prefix", "Text", "Expected prefix"),
    ArgMeta::required("operand", "Text", "Text to test"),
];

static SUFFIX_ARGS: [ArgMeta; 2] = [
    ArgMeta::required("suffix", "Text", "Expected suffix"),
    ArgMeta::required("operand", "Text", "Text to test"),
];

/// Shared adapter for `(Text, Text) -> T` search functions
fn call_pair<T: Into<Value>>(func: &str, first: &str, args: &[Value], f: fn(&str, &str) -> T) -> Value {
    invoke(|| {
        check_args(func, args, 2, 2)?;
        let a = require_text(&args[0], func, first)?;
        let operand = require_text(&args[1], func, "operand")?;
        Ok(f(a, operand))
    })
}

pub struct Contains;

impl FunctionPlugin for Contains {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "Contains",
            description: "Report whether substr is part of operand",
            usage: "Contains substr operand",
            args: &SUBSTR_ARGS,
            returns: "Bool",
            fallible: false,
            examples: &["\"seafood\" | Contains \"foo\" → true"],
            category: "text/search",
            related: &["ContainsAny", "Index"],
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        call_pair("Contains", "substr", args, contains)
    }
}

pub struct ContainsAny;

impl FunctionPlugin for ContainsAny {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "ContainsAny",
            description: "Report whether any of chars are part of operand",
            usage: "ContainsAny chars operand",
            args: &CHARS_ARGS,
            returns: "Bool",
            fallible: false,
            examples: &["\"failure\" | ContainsAny \"ui\" → true"],
            category: "text/search",
            related: &["Contains", "IndexAny"],
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        call_pair("ContainsAny", "chars", args, contains_any)
    }
}

pub struct Count;

impl FunctionPlugin for Count {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "Count",
            description: "Count non-overlapping occurrences of substr in operand",
            usage: "Count substr operand",
            args: &SUBSTR_ARGS,
            returns: "Int",
            fallible: false,
            examples: &["\"cheese\" | Count \"e\" → 3", "\"five\" | Count \"\" → 5"],
            category: "text/search",
            related: &["Contains"],
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        call_pair("Count", "substr", args, count)
    }
}

pub struct HasPrefix;

impl FunctionPlugin for HasPrefix {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "HasPrefix",
            description: "Report whether operand begins with prefix",
            usage: "HasPrefix prefix operand",
            args: &PREFIX_ARGS,
            returns: "Bool",
            fallible: false,
            examples: &["\"golang\" | HasPrefix \"go\" → true"],
            category: "text/search",
            related: &["HasSuffix", "TrimPrefix"],
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        call_pair("HasPrefix", "prefix", args, has_prefix)
    }
}

pub struct HasSuffix;

impl FunctionPlugin for HasSuffix {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "HasSuffix",
            description: "Report whether operand ends with suffix",
            usage: "HasSuffix suffix operand",
            args: &SUFFIX_ARGS,
            returns: "Bool",
            fallible: false,
            examples: &["\"amigo\" | HasSuffix \"go\" → true"],
            category: "text/search",
            related: &["HasPrefix", "TrimSuffix"],
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        call_pair("HasSuffix", "suffix", args, has_suffix)
    }
}

pub struct Index;

impl FunctionPlugin for Index {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "Index",
            description: "Byte index of the first occurrence of substr, or -1",
            usage: "Index substr operand",
            args: &SUBSTR_ARGS,
            returns: "Int",
            fallible: false,
            examples: &["\"chicken\" | Index \"ken\" → 4", "\"chicken\" | Index \"dmr\" → -1"],
            category: "text/search",
            related: &["LastIndex", "IndexAny"],
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        call_pair("Index", "substr", args, index)
    }
}

pub struct IndexAny;

impl FunctionPlugin for IndexAny {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "IndexAny",
            description: "Byte index of the first character from chars, or -1",
            usage: "IndexAny chars operand",
            args: &CHARS_ARGS,
            returns: "Int",
            fallible: false,
            examples: &["\"golang\" | IndexAny \"ng\" → 0"],
            category: "text/search",
            related: &["Index", "LastIndexAny"],
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        call_pair("IndexAny", "chars", args, index_any)
    }
}

pub struct LastIndex;

impl FunctionPlugin for LastIndex {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "LastIndex",
            description: "Byte index of the last occurrence of substr, or -1",
            usage: "LastIndex substr operand",
            args: &SUBSTR_ARGS,
            returns: "Int",
            fallible: false,
            examples: &["\"go gopher\" | LastIndex \"go\" → 3"],
            category: "text/search",
            related: &["Index", "LastIndexAny"],
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        call_pair("LastIndex", "substr", args, last_index)
    }
}

pub struct LastIndexAny;

impl FunctionPlugin for LastIndexAny {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "LastIndexAny",
            description: "Byte index of the last character from chars, or -1",
            usage: "LastIndexAny chars operand",
            args: &CHARS_ARGS,
            returns: "Int",
            fallible: false,
            examples: &["\"go gopher\" | LastIndexAny \"go\" → 4"],
            category: "text/search",
            related: &["IndexAny", "LastIndex"],
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        call_pair("LastIndexAny", "chars", args, last_index_any)
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
    fn test_contains() {
        assert!(contains("foo", "seafood"));
        assert!(!contains("bar", "seafood"));
        assert!(contains("", "seafood"));
    }

    #[test]
    fn test_contains_any() {
        assert!(contains_any("ui", "failure"));
        assert!(!contains_any("xyz", "team"));
        assert!(!contains_any("", "team"));
    }

    #[test]
    fn test_count() {
        assert_eq!(count("e", "cheese"), 3);
        assert_eq!(count("", "five"), 5);
        assert_eq!(count("aa", "aaaa"), 2);
    }

    #[test]
    fn test_indexes() {
        assert_eq!(index("ken", "chicken"), 4);
        assert_eq!(index("dmr", "chicken"), -1);
        assert_eq!(last_index("go", "go gopher"), 3);
        assert_eq!(index_any("ng", "golang"), 0);
        assert_eq!(last_index_any("go", "go gopher"), 4);
        assert_eq!(last_index_any("", "go gopher"), -1);
    }

    #[test]
    fn test_index_is_byte_offset() {
        assert_eq!(index("b", "éb"), 2);
    }

    #[test]
    fn test_plugin_operand_last() {
        let args = vec![Value::from("go"), Value::from("golang")];
        assert_eq!(HasPrefix.call(&args, &eval_ctx()), Value::Bool(true));
        assert_eq!(HasSuffix.call(&args, &eval_ctx()), Value::Bool(false));
    }

    #[test]
    fn test_plugin_arg_type_error() {
        let args = vec![Value::Int(1), Value::from("golang")];
        let result = Index.call(&args, &eval_ctx());
        assert_eq!(result.as_error().unwrap().kind, ErrorKind::ArgType);
    }

    #[test]
    fn test_plugin_arg_count_error() {
        let result = Count.call(&[Value::from("a")], &eval_ctx());
        assert_eq!(result.as_error().unwrap().kind, ErrorKind::ArgCount);
    }
}
