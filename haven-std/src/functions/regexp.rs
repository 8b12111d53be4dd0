//! Regular expressions: Matches, CompileRegex, CompileERE, QuoteRegex

use haven_plugin::prelude::*;

/// Whether `operand` contains a match of `pattern`.
pub fn matches(pattern: &str, operand: &str) -> Result<bool, HavenError> {
    Ok(Pattern::compile(pattern)?.is_match(operand))
}

pub fn compile_regex(pattern: &str) -> Result<Pattern, HavenError> {
    Pattern::compile(pattern)
}

/// Compile with POSIX extended syntax. Perl-only constructs are rejected.
pub fn compile_ere(pattern: &str) -> Result<Pattern, HavenError> {
    Pattern::compile_ere(pattern)
}

/// Escape every regex metacharacter in `operand`.
///
/// `-`, `#`, `&` and `~` are escaped as well, since they are special inside
/// classes or in verbose mode. The result still matches `operand` literally.
pub fn quote_regex(operand: &str) -> String {
    regex::escape(operand)
}

// ============ Plugins ============

static PATTERN_ARGS: [ArgMeta; 1] = [ArgMeta::required("pattern", "Text", "Regular expression")];

static MATCHES_ARGS: [ArgMeta; 2] = [
    ArgMeta::required("pattern", "Text|Pattern", "Regular expression"),
    ArgMeta::required("operand", "Text", "Text to test"),
];

static QUOTE_ARGS: [ArgMeta; 1] = [ArgMeta::required("operand", "Text", "Literal text")];

pub struct Matches;

impl FunctionPlugin for Matches {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "Matches",
            description: "Report whether operand contains a match of pattern",
            usage: "Matches pattern operand",
            args: &MATCHES_ARGS,
            returns: "Bool",
            fallible: true,
            examples: &["\"seafood\" | Matches \"foo.\" → true"],
            category: "regex",
            related: &["CompileRegex", "Grep"],
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        invoke(|| {
            check_args("Matches", args, 2, 2)?;
            let operand = require_text(&args[1], "Matches", "operand")?;
            match &args[0] {
                Value::Pattern(p) => Ok(p.is_match(operand)),
                other => matches(require_text(other, "Matches", "pattern")?, operand),
            }
        })
    }
}

pub struct CompileRegex;

impl FunctionPlugin for CompileRegex {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "CompileRegex",
            description: "Compile pattern into a reusable regular expression",
            usage: "CompileRegex pattern",
            args: &PATTERN_ARGS,
            returns: "Pattern",
            fallible: true,
            examples: &["CompileRegex \"^[a-z]+\\\\d$\" → /^[a-z]+\\d$/"],
            category: "regex",
            related: &["CompileERE", "Matches"],
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        invoke(|| {
            check_args("CompileRegex", args, 1, 1)?;
            compile_regex(require_text(&args[0], "CompileRegex", "pattern")?)
        })
    }
}

pub struct CompileERE;

impl FunctionPlugin for CompileERE {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "CompileERE",
            description: "Compile pattern with POSIX extended regular expression syntax",
            usage: "CompileERE pattern",
            args: &PATTERN_ARGS,
            returns: "Pattern",
            fallible: true,
            examples: &["CompileERE \"[[:digit:]]+\" → /[[:digit:]]+/"],
            category: "regex",
            related: &["CompileRegex"],
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        invoke(|| {
            check_args("CompileERE", args, 1, 1)?;
            compile_ere(require_text(&args[0], "CompileERE", "pattern")?)
        })
    }
}

pub struct QuoteRegex;

impl FunctionPlugin for QuoteRegex {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "QuoteRegex",
            description: "Escape all regular expression metacharacters in operand",
            usage: "QuoteRegex operand",
            args: &QUOTE_ARGS,
            returns: "Text",
            fallible: false,
            examples: &["\"1.5+2\" | QuoteRegex → \"1\\\\.5\\\\+2\""],
            category: "regex",
            related: &["CompileRegex", "Quote"],
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        invoke(|| {
            check_args("QuoteRegex", args, 1, 1)?;
            Ok(quote_regex(require_text(&args[0], "QuoteRegex", "operand")?))
        })
    }
}
