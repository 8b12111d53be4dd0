//! Runtime values in Haven
//!
//! Values can be integers, floats, text, booleans, timestamps, compiled
//! patterns, lists, objects (URL components), null, or errors. Errors
//! propagate through pipelines unchanged.

use crate::{HavenError, Pattern};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Runtime value passed to and returned from template functions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Value {
    Int(i64),
    Float(f64),
    Text(String),
    Bool(bool),
    Time(DateTime<FixedOffset>),
    Pattern(Pattern),
    List(Vec<Value>),
    Object(HashMap<String, Value>),
    Null,
    Error(HavenError),
}

impl Value {
    // ========== Safe Accessors (never panic) ==========

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_time(&self) -> Option<&DateTime<FixedOffset>> {
        match self {
            Value::Time(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_pattern(&self) -> Option<&Pattern> {
        match self {
            Value::Pattern(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&HashMap<String, Value>> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    pub fn as_error(&self) -> Option<&HavenError> {
        match self {
            Value::Error(e) => Some(e),
            _ => None,
        }
    }

    /// Texts of a list, or `None` if this is not a list of text
    pub fn as_text_list(&self) -> Option<Vec<&str>> {
        self.as_list()?.iter().map(Value::as_text).collect()
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    // ========== Object Field Access ==========

    /// Get field from object. Missing fields and non-objects read as `Null`;
    /// errors propagate.
    pub fn get(&self, key: &str) -> Value {
        match self {
            Value::Object(map) => map.get(key).cloned().unwrap_or(Value::Null),
            Value::Error(e) => Value::Error(e.clone()),
            _ => Value::Null,
        }
    }

    /// Type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "Int",
            Value::Float(_) => "Float",
            Value::Text(_) => "Text",
            Value::Bool(_) => "Bool",
            Value::Time(_) => "Time",
            Value::Pattern(_) => "Pattern",
            Value::List(_) => "List",
            Value::Object(_) => "Object",
            Value::Null => "Null",
            Value::Error(_) => "Error",
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(x) => write!(f, "{}", x),
            Value::Text(s) => write!(f, "{}", s),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Time(t) => write!(f, "{}", t.to_rfc3339()),
            Value::Pattern(p) => write!(f, "{}", p),
            Value::List(items) => {
                let contents: Vec<String> = items.iter().map(|v| v.to_string()).collect();
                write!(f, "[{}]", contents.join(" "))
            }
            Value::Object(obj) => {
                // URL components render as the original URL
                if let Some(Value::Text(raw)) = obj.get("raw") {
                    return write!(f, "{}", raw);
                }
                let mut keys: Vec<&String> = obj.keys().collect();
                keys.sort();
                let fields: Vec<String> = keys.iter().map(|k| format!("{}:{}", k, obj[*k])).collect();
                write!(f, "map[{}]", fields.join(" "))
            }
            Value::Null => write!(f, "<nil>"),
            Value::Error(e) => write!(f, "#ERROR: {}", e.code()),
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Null
    }
}

// From implementations for convenience
impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<DateTime<FixedOffset>> for Value {
    fn from(t: DateTime<FixedOffset>) -> Self {
        Value::Time(t)
    }
}

impl From<Pattern> for Value {
    fn from(p: Pattern) -> Self {
        Value::Pattern(p)
    }
}

impl From<HavenError> for Value {
    fn from(e: HavenError) -> Self {
        Value::Error(e)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

/// Fallible results become either their value or an error value
impl<T: Into<Value>> From<Result<T, HavenError>> for Value {
    fn from(result: Result<T, HavenError>) -> Self {
        match result {
            Ok(v) => v.into(),
            Err(e) => Value::Error(e),
        }
    }
}
