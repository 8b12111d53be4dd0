//! Argument adaptation helpers
//!
//! Plugins receive loosely-typed `Value` arguments from the host engine.
//! These helpers check arity and types and turn the typed result back into a
//! `Value`, so each plugin body stays a thin adapter.

use haven_core::{HavenError, Value};

/// Run a fallible adapter body and convert its outcome into a `Value`.
pub fn invoke<T, F>(body: F) -> Value
where
    T: Into<Value>,
    F: FnOnce() -> Result<T, HavenError>,
{
    body().into()
}

/// Propagate the first error argument, then check the argument count.
pub fn check_args(func: &str, args: &[Value], min: usize, max: usize) -> Result<(), HavenError> {
    if let Some(err) = args.iter().find_map(Value::as_error) {
        return Err(err.clone());
    }
    if args.len() < min || args.len() > max {
        let expected = if min == max {
            min.to_string()
        } else if max == usize::MAX {
            format!("at least {}", min)
        } else {
            format!("{} to {}", min, max)
        };
        return Err(HavenError::arg_count(func, &expected, args.len()));
    }
    Ok(())
}

pub fn require_text<'a>(value: &'a Value, func: &str, arg: &str) -> Result<&'a str, HavenError> {
    match value {
        Value::Text(s) => Ok(s.as_str()),
        Value::Error(e) => Err(e.clone()),
        other => Err(HavenError::arg_type(func, arg, "Text", other.type_name())),
    }
}

pub fn require_int(value: &Value, func: &str, arg: &str) -> Result<i64, HavenError> {
    match value {
        Value::Int(n) => Ok(*n),
        Value::Error(e) => Err(e.clone()),
        other => Err(HavenError::arg_type(func, arg, "Int", other.type_name())),
    }
}

/// Extract a list of text. `Null` reads as the empty list.
pub fn require_text_list(value: &Value, func: &str, arg: &str) -> Result<Vec<String>, HavenError> {
    match value {
        Value::List(items) => items
            .iter()
            .map(|item| match item {
                Value::Text(s) => Ok(s.clone()),
                Value::Error(e) => Err(e.clone()),
                other => Err(HavenError::arg_type(func, arg, "List<Text>", &format!("List<{}>", other.type_name()))),
            })
            .collect(),
        Value::Null => Ok(Vec::new()),
        Value::Error(e) => Err(e.clone()),
        other => Err(HavenError::arg_type(func, arg, "List<Text>", other.type_name())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use haven_core::ErrorKind;

    #[test]
    fn test_check_args_count() {
        let args = vec![Value::from("a")];
        let err = check_args("Split", &args, 2, 2).unwrap_err();
        assert_eq!(err.kind, ErrorKind::ArgCount);
        assert!(err.message.contains("expects 2 arguments, got 1"));
    }

    #[test]
    fn test_check_args_range_message() {
        let err = check_args("Seq", &[], 2, 3).unwrap_err();
        assert!(err.message.contains("2 to 3"));
    }

    #[test]
    fn test_check_args_propagates_error_first() {
        let upstream = HavenError::malformed_boolean("x");
        let args = vec![Value::Error(upstream.clone())];
        assert_eq!(check_args("Split", &args, 2, 2).unwrap_err(), upstream);
    }

    #[test]
    fn test_require_text_type_error() {
        let err = require_text(&Value::Int(3), "ToUpper", "operand").unwrap_err();
        assert_eq!(err.kind, ErrorKind::ArgType);
    }

    #[test]
    fn test_require_text_list_null_is_empty() {
        assert!(require_text_list(&Value::Null, "Sort", "operand").unwrap().is_empty());
    }

    #[test]
    fn test_require_text_list_rejects_ints() {
        let v = Value::from(vec![1i64, 2]);
        let err = require_text_list(&v, "Sort", "operand").unwrap_err();
        assert!(err.message.contains("List<Int>"));
    }

    #[test]
    fn test_invoke_wraps_result() {
        let v = invoke(|| Ok::<_, HavenError>(7i64));
        assert_eq!(v, Value::Int(7));
    }
}
