//! Structured errors for template authors
//!
//! Recoverable failures are values. They are returned as `Err(HavenError)`
//! by the typed functions and travel as `Value::Error` through the registry,
//! so the host engine can decide whether to abort rendering or substitute a
//! default.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const MALFORMED_NUMBER: &str = "MALFORMED_NUMBER";
    pub const MALFORMED_BOOLEAN: &str = "MALFORMED_BOOLEAN";
    pub const MALFORMED_TIMESTAMP: &str = "MALFORMED_TIMESTAMP";
    pub const MALFORMED_URL: &str = "MALFORMED_URL";
    pub const INVALID_ENCODING: &str = "INVALID_ENCODING";
    pub const INVALID_PATTERN: &str = "INVALID_PATTERN";
    pub const MALFORMED_LITERAL: &str = "MALFORMED_LITERAL";
    // Argument adaptation
    pub const ARG_COUNT: &str = "ARG_COUNT";
    pub const ARG_TYPE: &str = "ARG_TYPE";
    pub const UNDEFINED_FUNC: &str = "UNDEFINED_FUNC";
    pub const NOT_FOUND: &str = "NOT_FOUND";
}

/// Kind of a recoverable error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    MalformedNumber,
    MalformedBoolean,
    MalformedTimestamp,
    MalformedUrl,
    InvalidEncoding,
    InvalidPattern,
    MalformedLiteral,
    ArgCount,
    ArgType,
    UndefinedFunc,
    NotFound,
}

impl ErrorKind {
    pub const fn code(self) -> &'static str {
        match self {
            ErrorKind::MalformedNumber => codes::MALFORMED_NUMBER,
            ErrorKind::MalformedBoolean => codes::MALFORMED_BOOLEAN,
            ErrorKind::MalformedTimestamp => codes::MALFORMED_TIMESTAMP,
            ErrorKind::MalformedUrl => codes::MALFORMED_URL,
            ErrorKind::InvalidEncoding => codes::INVALID_ENCODING,
            ErrorKind::InvalidPattern => codes::INVALID_PATTERN,
            ErrorKind::MalformedLiteral => codes::MALFORMED_LITERAL,
            ErrorKind::ArgCount => codes::ARG_COUNT,
            ErrorKind::ArgType => codes::ARG_TYPE,
            ErrorKind::UndefinedFunc => codes::UNDEFINED_FUNC,
            ErrorKind::NotFound => codes::NOT_FOUND,
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Structured, recoverable error
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("[{kind}] {message}")]
pub struct HavenError {
    /// Machine-readable kind, serialized as its code
    #[serde(rename = "code")]
    pub kind: ErrorKind,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the error
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub suggestion: Option<String>,
}

impl HavenError {
    /// Create a new error
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            suggestion: None,
        }
    }

    /// Builder: add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Machine-readable code, e.g. `"INVALID_PATTERN"`
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    // ========== Operation Error Constructors ==========

    pub fn malformed_number(input: &str, details: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::MalformedNumber,
            format!("cannot parse {:?} as a number: {}", input, details.into()),
        )
    }

    pub fn malformed_boolean(input: &str) -> Self {
        Self::new(
            ErrorKind::MalformedBoolean,
            format!("cannot parse {:?} as a boolean", input),
        )
        .with_suggestion("Use one of 1, t, T, TRUE, true, True, 0, f, F, FALSE, false, False")
    }

    pub fn malformed_timestamp(input: &str, format: &str, details: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::MalformedTimestamp,
            format!(
                "cannot parse {:?} with format {:?}: {}",
                input,
                format,
                details.into()
            ),
        )
        .with_suggestion("Formats use strftime specifiers, e.g. %Y-%m-%d %H:%M:%S")
    }

    pub fn malformed_url(input: &str, details: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::MalformedUrl,
            format!("cannot parse {:?} as a URL: {}", input, details.into()),
        )
    }

    pub fn invalid_encoding(details: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::InvalidEncoding,
            format!("invalid base64 input: {}", details.into()),
        )
    }

    pub fn invalid_pattern(pattern: &str, details: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::InvalidPattern,
            format!("invalid pattern {:?}: {}", pattern, details.into()),
        )
    }

    pub fn malformed_literal(input: &str) -> Self {
        Self::new(
            ErrorKind::MalformedLiteral,
            format!("{:?} is not a valid quoted literal", input),
        )
    }

    // ========== Adaptation Error Constructors ==========

    pub fn arg_count(func: &str, expected: &str, got: usize) -> Self {
        Self::new(
            ErrorKind::ArgCount,
            format!("{}() expects {} arguments, got {}", func, expected, got),
        )
        .with_suggestion(format!("Use help(\"{}\") for usage", func))
    }

    pub fn arg_type(func: &str, arg: &str, expected: &str, got: &str) -> Self {
        Self::new(
            ErrorKind::ArgType,
            format!("{}() argument '{}': expected {}, got {}", func, arg, expected, got),
        )
    }

    pub fn undefined_func(name: &str) -> Self {
        Self::new(ErrorKind::UndefinedFunc, format!("Unknown function: {}", name))
            .with_suggestion("Function names are case-sensitive, e.g. Split, ToUpper")
    }

    pub fn not_found(name: &str) -> Self {
        Self::new(ErrorKind::NotFound, format!("No function named '{}'", name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_code() {
        let err = HavenError::invalid_pattern("[", "unclosed class");
        assert_eq!(err.to_string(), "[INVALID_PATTERN] invalid pattern \"[\": unclosed class");
    }

    #[test]
    fn test_code_matches_kind() {
        assert_eq!(HavenError::malformed_boolean("yes").code(), codes::MALFORMED_BOOLEAN);
        assert_eq!(ErrorKind::MalformedUrl.code(), "MALFORMED_URL");
    }

    #[test]
    fn test_serializes_code_field() {
        let err = HavenError::invalid_encoding("bad byte");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "INVALID_ENCODING");
        assert!(json.get("suggestion").is_none());

        let back: HavenError = serde_json::from_value(json).unwrap();
        assert_eq!(back, err);
    }
}
