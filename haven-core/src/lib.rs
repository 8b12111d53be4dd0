//! Haven Core - Fundamental types
//!
//! This crate provides the core types used throughout Haven:
//! - `Value`: Runtime values (text, integers, lists, timestamps, errors)
//! - `Pattern`: Compiled regular expressions in two syntax flavors
//! - `HavenError`: Structured, recoverable errors

mod error;
mod pattern;
mod value;

pub use error::{codes, ErrorKind, HavenError};
pub use pattern::{Flavor, Pattern};
pub use value::Value;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::error::codes;
    pub use crate::{ErrorKind, Flavor, HavenError, Pattern, Value};
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone};

    mod value_tests {
        use super::*;

        #[test]
        fn test_from_result_ok() {
            let v: Value = Ok::<_, HavenError>(42i64).into();
            assert_eq!(v.as_int(), Some(42));
        }

        #[test]
        fn test_from_result_err() {
            let v: Value = Err::<i64, _>(HavenError::malformed_boolean("yes")).into();
            assert!(v.is_error());
            assert_eq!(v.as_error().unwrap().kind, ErrorKind::MalformedBoolean);
        }

        #[test]
        fn test_from_string_vec() {
            let v = Value::from(vec!["a".to_string(), "b".to_string()]);
            assert_eq!(v.as_text_list(), Some(vec!["a", "b"]));
        }

        #[test]
        fn test_text_list_rejects_mixed() {
            let v = Value::List(vec![Value::from("a"), Value::Int(1)]);
            assert_eq!(v.as_text_list(), None);
        }

        #[test]
        fn test_display_list() {
            let v = Value::from(vec![1i64, 2, 3]);
            assert_eq!(v.to_string(), "[1 2 3]");
        }

        #[test]
        fn test_display_time_rfc3339() {
            let t = FixedOffset::east_opt(0)
                .unwrap()
                .with_ymd_and_hms(2016, 1, 2, 3, 4, 5)
                .unwrap();
            assert_eq!(Value::Time(t).to_string(), "2016-01-02T03:04:05+00:00");
        }

        #[test]
        fn test_get_missing_field_is_null() {
            let v = Value::Object(Default::default());
            assert!(v.get("host").is_null());
        }

        #[test]
        fn test_type_names() {
            assert_eq!(Value::Null.type_name(), "Null");
            assert_eq!(Value::from(1.5).type_name(), "Float");
            assert_eq!(Value::from(vec!["x"]).type_name(), "List");
        }
    }

    mod serde_tests {
        use super::*;

        #[test]
        fn test_value_tagged_json() {
            let json = serde_json::to_value(Value::from("hi")).unwrap();
            assert_eq!(json["type"], "Text");
            assert_eq!(json["value"], "hi");
        }

        #[test]
        fn test_pattern_recompiles_on_deserialize() {
            let v = Value::Pattern(Pattern::compile_ere("^a+$").unwrap());
            let json = serde_json::to_string(&v).unwrap();
            let back: Value = serde_json::from_str(&json).unwrap();
            let p = back.as_pattern().unwrap();
            assert_eq!(p.flavor(), Flavor::Ere);
            assert!(p.is_match("aaa"));
        }

        #[test]
        fn test_invalid_pattern_fails_to_deserialize() {
            let json = r#"{"type":"Pattern","value":{"source":"[","flavor":"regex"}}"#;
            assert!(serde_json::from_str::<Value>(json).is_err());
        }
    }
}
