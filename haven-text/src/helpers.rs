//! Helper functions for text operations

/// Split `operand` around `sep`, returning at most `n` pieces.
///
/// `n == 0` yields nothing and `n < 0` means no limit. With `keep_sep` each
/// piece but the last retains its trailing separator. An empty separator
/// splits into single characters.
pub fn generic_split(operand: &str, sep: &str, keep_sep: bool, n: i64) -> Vec<String> {
    if n == 0 {
        return Vec::new();
    }
    if sep.is_empty() {
        return explode(operand, n);
    }
    let limit = if n < 0 { usize::MAX } else { n as usize };

    let mut parts = Vec::new();
    let mut rest = operand;
    while parts.len() + 1 < limit {
        let m = match rest.find(sep) {
            Some(m) => m,
            None => break,
        };
        let end = if keep_sep { m + sep.len() } else { m };
        parts.push(rest[..end].to_string());
        rest = &rest[m + sep.len()..];
    }
    parts.push(rest.to_string());
    parts
}

/// Split into characters; the last piece holds the remainder when `n`
/// is smaller than the character count.
fn explode(operand: &str, n: i64) -> Vec<String> {
    let total = operand.chars().count();
    let n = if n < 0 || n as usize > total { total } else { n as usize };

    let mut parts = Vec::with_capacity(n);
    let mut chars = operand.chars();
    for _ in 1..n {
        if let Some(c) = chars.next() {
            parts.push(c.to_string());
        }
    }
    if n > 0 {
        parts.push(chars.as_str().to_string());
    }
    parts
}

/// Word boundary test used by title-casing
pub fn is_word_separator(c: char) -> bool {
    if c.is_ascii() {
        return !(c.is_ascii_alphanumeric() || c == '_');
    }
    if c.is_alphanumeric() {
        return false;
    }
    c.is_whitespace()
}
