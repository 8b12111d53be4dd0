//! Helper functions shared by the sequence plugins

use haven_plugin::prelude::*;

/// Clamp a requested element count to `0..=len`.
pub fn clamp_count(n: i64, len: usize) -> usize {
    if n <= 0 {
        0
    } else {
        usize::try_from(n).map_or(len, |n| n.min(len))
    }
}

/// Adapter for `(seq) -> seq` functions
pub fn call_seq(func: &str, args: &[Value], f: impl FnOnce(&[String]) -> Vec<String>) -> Value {
    invoke(|| {
        check_args(func, args, 1, 1)?;
        let operand = require_text_list(&args[0], func, "operand")?;
        Ok(f(&operand))
    })
}

/// Adapter for `(n, seq) -> seq` functions
pub fn call_count_seq(func: &str, args: &[Value], f: fn(i64, &[String]) -> Vec<String>) -> Value {
    invoke(|| {
        check_args(func, args, 2, 2)?;
        let n = require_int(&args[0], func, "n")?;
        let operand = require_text_list(&args[1], func, "operand")?;
        Ok(f(n, &operand))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_count() {
        assert_eq!(clamp_count(-3, 5), 0);
        assert_eq!(clamp_count(0, 5), 0);
        assert_eq!(clamp_count(3, 5), 3);
        assert_eq!(clamp_count(i64::MAX, 5), 5);
    }
}
