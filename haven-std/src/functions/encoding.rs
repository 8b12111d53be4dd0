//! Base64 with the standard, padded alphabet

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use haven_plugin::prelude::*;

pub fn base64_encode(operand: &str) -> String {
    STANDARD.encode(operand)
}

/// Decode `operand`. Carriage returns and newlines are skipped, so wrapped
/// input decodes. Input that is not valid base64, or that decodes to bytes
/// which are not UTF-8, is an `InvalidEncoding` error.
pub fn base64_decode(operand: &str) -> Result<String, HavenError> {
    let unwrapped: String = operand.chars().filter(|c| !matches!(c, '\r' | '\n')).collect();
    let bytes = STANDARD
        .decode(unwrapped)
        .map_err(|e| HavenError::invalid_encoding(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| HavenError::invalid_encoding(e.to_string()))
}

// ============ Plugins ============

static ENCODE_ARGS: [ArgMeta; 1] = [ArgMeta::required("operand", "Text", "Text to encode")];

static DECODE_ARGS: [ArgMeta; 1] = [ArgMeta::required("operand", "Text", "Base64 text")];

pub struct Base64Encode;

impl FunctionPlugin for Base64Encode {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "Base64Encode",
            description: "Encode operand as standard base64",
            usage: "Base64Encode operand",
            args: &ENCODE_ARGS,
            returns: "Text",
            fallible: false,
            examples: &["\"hello\" | Base64Encode → \"aGVsbG8=\""],
            category: "encoding",
            related: &["Base64Decode"],
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        invoke(|| {
            check_args("Base64Encode", args, 1, 1)?;
            Ok(base64_encode(require_text(&args[0], "Base64Encode", "operand")?))
        })
    }
}

pub struct Base64Decode;

impl FunctionPlugin for Base64Decode {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "Base64Decode",
            description: "Decode standard base64 operand",
            usage: "Base64Decode operand",
            args: &DECODE_ARGS,
            returns: "Text",
            fallible: true,
            examples: &["\"aGVsbG8=\" | Base64Decode → \"hello\""],
            category: "encoding",
            related: &["Base64Encode"],
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        invoke(|| {
            check_args("Base64Decode", args, 1, 1)?;
            base64_decode(require_text(&args[0], "Base64Decode", "operand")?)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode() {
        assert_eq!(base64_encode("hello"), "aGVsbG8=");
        assert_eq!(base64_encode(""), "");
        assert_eq!(base64_encode("héllo wörld"), "aMOpbGxvIHfDtnJsZA==");
    }

    #[test]
    fn test_decode() {
        assert_eq!(base64_decode("aGVsbG8=").unwrap(), "hello");
        assert_eq!(base64_decode("").unwrap(), "");
    }

    #[test]
    fn test_decode_skips_line_breaks() {
        assert_eq!(base64_decode("aGVs\nbG8=").unwrap(), "hello");
        assert_eq!(base64_decode("aGVsbG8=\r\n").unwrap(), "hello");
        assert_eq!(base64_decode("\r\n").unwrap(), "");
    }

    #[test]
    fn test_decode_invalid() {
        for input in ["not-valid-base64!!", "aGVsbG8", "/w=="] {
            let err = base64_decode(input).unwrap_err();
            assert_eq!(err.kind, ErrorKind::InvalidEncoding, "input: {}", input);
        }
    }
}
