//! Quoted string literals: Quote and Unquote

use haven_plugin::prelude::*;
use std::fmt::Write;

/// Render `operand` as a double-quoted literal with escapes for quotes,
/// backslashes and control characters.
pub fn quote(operand: &str) -> String {
    let mut out = String::with_capacity(operand.len() + 2);
    out.push('"');
    for c in operand.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\x07' => out.push_str("\\a"),
            '\x08' => out.push_str("\\b"),
            '\x0c' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\x0b' => out.push_str("\\v"),
            c if (c as u32) < 0x20 || c == '\x7f' => {
                let _ = write!(out, "\\x{:02x}", c as u32);
            }
            c if c.is_control() => {
                if (c as u32) < 0x10000 {
                    let _ = write!(out, "\\u{:04x}", c as u32);
                } else {
                    let _ = write!(out, "\\U{:08x}", c as u32);
                }
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Interpret a double-, single- or back-quoted literal.
pub fn unquote(operand: &str) -> Result<String, HavenError> {
    let malformed = || HavenError::malformed_literal(operand);

    let quote = operand.chars().next().ok_or_else(malformed)?;
    let width = quote.len_utf8();
    if operand.len() < 2 * width || !operand.ends_with(quote) {
        return Err(malformed());
    }
    let body = &operand[width..operand.len() - width];

    match quote {
        '`' => {
            if body.contains('`') {
                return Err(malformed());
            }
            Ok(body.replace('\r', ""))
        }
        '"' | '\'' => unquote_escaped(body, quote).ok_or_else(malformed),
        _ => Err(malformed()),
    }
}

/// One decoded element of a quoted literal. Byte escapes (`\xHH`, `\ooo`)
/// contribute a raw byte rather than a character.
enum Unit {
    Char(char),
    Byte(u8),
}

fn unquote_escaped(body: &str, quote: char) -> Option<String> {
    let mut buf = Vec::with_capacity(body.len());
    let mut rest = body;
    let mut units = 0;
    while !rest.is_empty() {
        let (unit, tail) = unquote_char(rest, quote)?;
        match unit {
            Unit::Char(c) => {
                let mut tmp = [0u8; 4];
                buf.extend_from_slice(c.encode_utf8(&mut tmp).as_bytes());
            }
            Unit::Byte(b) => buf.push(b),
        }
        units += 1;
        rest = tail;
    }
    if quote == '\'' && units != 1 {
        return None;
    }
    String::from_utf8(buf).ok()
}

/// Decode the first character or escape sequence of `s`.
fn unquote_char(s: &str, quote: char) -> Option<(Unit, &str)> {
    let mut chars = s.chars();
    let c = chars.next()?;
    if c == quote || c == '\n' {
        return None;
    }
    if c != '\\' {
        return Some((Unit::Char(c), chars.as_str()));
    }

    let esc = chars.next()?;
    let rest = chars.as_str();
    let simple = match esc {
        'a' => Some('\x07'),
        'b' => Some('\x08'),
        'f' => Some('\x0c'),
        'n' => Some('\n'),
        'r' => Some('\r'),
        't' => Some('\t'),
        'v' => Some('\x0b'),
        '\\' => Some('\\'),
        '\'' | '"' if esc == quote => Some(esc),
        _ => None,
    };
    if let Some(c) = simple {
        return Some((Unit::Char(c), rest));
    }

    match esc {
        'x' | 'u' | 'U' => {
            let len = match esc {
                'x' => 2,
                'u' => 4,
                _ => 8,
            };
            let digits = rest.get(..len)?;
            if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
                return None;
            }
            let value = u32::from_str_radix(digits, 16).ok()?;
            let tail = &rest[len..];
            if esc == 'x' {
                return Some((Unit::Byte(value as u8), tail));
            }
            Some((Unit::Char(char::from_u32(value)?), tail))
        }
        '0'..='7' => {
            let digits = s.get(1..4)?;
            if !digits.bytes().all(|b| (b'0'..=b'7').contains(&b)) {
                return None;
            }
            let value = u32::from_str_radix(digits, 8).ok()?;
            if value > 0xff {
                return None;
            }
            Some((Unit::Byte(value as u8), &s[4..]))
        }
        _ => None,
    }
}

// ============ Plugins ============

static QUOTE_ARGS: [ArgMeta; 1] = [ArgMeta::required("operand", "Text", "Text to quote")];

static UNQUOTE_ARGS: [ArgMeta; 1] = [ArgMeta::required("operand", "Text", "Quoted literal")];

pub struct Quote;

impl FunctionPlugin for Quote {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "Quote",
            description: "Render operand as a double-quoted literal with escapes",
            usage: "Quote operand",
            args: &QUOTE_ARGS,
            returns: "Text",
            fallible: false,
            examples: &["\"say \\\"hi\\\"\\n\" | Quote → \"\\\"say \\\\\\\"hi\\\\\\\"\\\\n\\\"\""],
            category: "text/quote",
            related: &["Unquote", "QuoteRegex"],
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        invoke(|| {
            check_args("Quote", args, 1, 1)?;
            Ok(quote(require_text(&args[0], "Quote", "operand")?))
        })
    }
}

pub struct Unquote;

impl FunctionPlugin for Unquote {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "Unquote",
            description: "Interpret a double-, single- or back-quoted literal",
            usage: "Unquote operand",
            args: &UNQUOTE_ARGS,
            returns: "Text",
            fallible: true,
            examples: &["`\"a\\tb\"` | Unquote → \"a<TAB>b\"", "\"'x'\" | Unquote → \"x\""],
            category: "text/quote",
            related: &["Quote"],
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        invoke(|| {
            check_args("Unquote", args, 1, 1)?;
            unquote(require_text(&args[0], "Unquote", "operand")?)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_quote() {
        assert_eq!(quote("Hello, 世界"), "\"Hello, 世界\"");
        assert_eq!(quote("a\"b\\c"), r#""a\"b\\c""#);
        assert_eq!(quote("\x07\x08\x0c\n\r\t\x0b"), r#""\a\b\f\n\r\t\v""#);
        assert_eq!(quote("\x01\x7f"), r#""\x01\x7f""#);
        assert_eq!(quote("\u{85}"), r#""\u0085""#);
        assert_eq!(quote(""), "\"\"");
    }

    #[test]
    fn test_unquote_double() {
        assert_eq!(unquote(r#""a\tb""#).unwrap(), "a\tb");
        assert_eq!(unquote(r#""\u263a""#).unwrap(), "☺");
        assert_eq!(unquote(r#""\U0001F600""#).unwrap(), "😀");
        assert_eq!(unquote(r#""\xe2\x98\xba""#).unwrap(), "☺");
        assert_eq!(unquote(r#""\101\102""#).unwrap(), "AB");
        assert_eq!(unquote(r#""\"""#).unwrap(), "\"");
        assert_eq!(unquote("\"\"").unwrap(), "");
    }

    #[test]
    fn test_unquote_single() {
        assert_eq!(unquote("'a'").unwrap(), "a");
        assert_eq!(unquote(r"'\''").unwrap(), "'");
        assert_eq!(unquote(r"'\n'").unwrap(), "\n");
        assert_eq!(unquote("'☺'").unwrap(), "☺");
    }

    #[test]
    fn test_unquote_raw() {
        assert_eq!(unquote(r"`a\n`").unwrap(), r"a\n");
        assert_eq!(unquote("`a\r\nb`").unwrap(), "a\nb");
    }

    #[test]
    fn test_unquote_malformed() {
        let bad = [
            "",
            "\"",
            "noquotes",
            "\"unterminated",
            "\"a\"b\"",
            r#""\'""#,
            r#"'\"'"#,
            "'ab'",
            "''",
            "\"line\nbreak\"",
            r#""\400""#,
            r#""\377""#,
            r#""\xZZ""#,
            r#""\ud800""#,
            r#""\q""#,
            "`a`b`",
        ];
        for input in bad {
            let err = unquote(input).unwrap_err();
            assert_eq!(err.kind, ErrorKind::MalformedLiteral, "input: {:?}", input);
        }
    }

    #[test]
    fn test_quote_unquote_round_trip() {
        for s in ["plain", "tab\there", "quote\"s", "\u{0}\u{7f}\u{9f}", "日本語\n"] {
            assert_eq!(unquote(&quote(s)).unwrap(), s);
        }
    }

    #[test]
    fn test_unquote_plugin_error_value() {
        let ctx = EvalContext::new(Arc::new(PluginRegistry::new()));
        let result = Unquote.call(&[Value::from("oops")], &ctx);
        assert_eq!(result.as_error().unwrap().code(), codes::MALFORMED_LITERAL);
    }
}
