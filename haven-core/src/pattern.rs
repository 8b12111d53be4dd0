//! Compiled regular expressions as runtime values
//!
//! Two flavors are supported. `Regex` accepts the full syntax of the `regex`
//! crate; `Ere` restricts patterns to POSIX extended syntax. Both reject a
//! bracket expression naming an unknown character class such as
//! `[[:bogus:]]`, which the `regex` crate would otherwise read as a nested
//! set.

use crate::HavenError;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Class names accepted inside `[: :]`
const POSIX_CLASSES: [&str; 14] = [
    "alnum", "alpha", "ascii", "blank", "cntrl", "digit", "graph", "lower", "print", "punct",
    "space", "upper", "word", "xdigit",
];

/// Escapes that belong to Perl syntax rather than POSIX ERE
const PERL_ESCAPES: &[u8] = b"dDwWsSbBAzpP";

/// Syntax flavor a pattern was compiled with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Flavor {
    Regex,
    Ere,
}

/// A compiled regular expression together with its source text
#[derive(Clone, Serialize, Deserialize)]
#[serde(try_from = "PatternSource", into = "PatternSource")]
pub struct Pattern {
    source: String,
    flavor: Flavor,
    regex: Regex,
}

#[derive(Serialize, Deserialize)]
struct PatternSource {
    source: String,
    flavor: Flavor,
}

impl Pattern {
    /// Compile with the general flavor
    pub fn compile(pattern: &str) -> Result<Self, HavenError> {
        Self::with_flavor(pattern, Flavor::Regex)
    }

    /// Compile with the POSIX extended flavor
    pub fn compile_ere(pattern: &str) -> Result<Self, HavenError> {
        Self::with_flavor(pattern, Flavor::Ere)
    }

    pub fn with_flavor(pattern: &str, flavor: Flavor) -> Result<Self, HavenError> {
        check_bracket_classes(pattern)?;
        if flavor == Flavor::Ere {
            check_ere(pattern)?;
        }
        let regex = Regex::new(pattern)
            .map_err(|e| HavenError::invalid_pattern(pattern, e.to_string()))?;
        Ok(Self {
            source: pattern.to_string(),
            flavor,
            regex,
        })
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.flavor == other.flavor && self.source == other.source
    }
}

impl std::fmt::Debug for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pattern")
            .field("source", &self.source)
            .field("flavor", &self.flavor)
            .finish()
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "/{}/", self.source)
    }
}

impl TryFrom<PatternSource> for Pattern {
    type Error = HavenError;

    fn try_from(src: PatternSource) -> Result<Self, Self::Error> {
        Self::with_flavor(&src.source, src.flavor)
    }
}

impl From<Pattern> for PatternSource {
    fn from(p: Pattern) -> Self {
        Self {
            source: p.source,
            flavor: p.flavor,
        }
    }
}

/// Reject `[:name:]` inside a bracket expression unless `name` is a known class.
fn check_bracket_classes(pattern: &str) -> Result<(), HavenError> {
    let bytes = pattern.as_bytes();
    let mut depth = 0usize;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => {
                i += 2;
                continue;
            }
            b'[' if depth > 0 && bytes.get(i + 1) == Some(&b':') => {
                if let Some(len) = pattern[i + 2..].find(":]") {
                    let name = &pattern[i + 2..i + 2 + len];
                    let bare = name.strip_prefix('^').unwrap_or(name);
                    if !POSIX_CLASSES.contains(&bare) {
                        return Err(HavenError::invalid_pattern(
                            pattern,
                            format!("unknown character class [:{}:]", name),
                        ));
                    }
                    i += len + 4;
                    continue;
                }
                depth += 1;
            }
            b'[' => {
                depth += 1;
                i += 1;
                // `]` directly after the opening (or after `^`) is a literal
                if bytes.get(i) == Some(&b'^') {
                    i += 1;
                }
                if bytes.get(i) == Some(&b']') {
                    i += 1;
                }
                continue;
            }
            b']' if depth > 0 => depth -= 1,
            _ => {}
        }
        i += 1;
    }
    Ok(())
}

/// Reject syntax that POSIX ERE does not have.
fn check_ere(pattern: &str) -> Result<(), HavenError> {
    let bytes = pattern.as_bytes();
    let mut in_class = false;
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b == b'\\' {
            if let Some(&next) = bytes.get(i + 1) {
                if PERL_ESCAPES.contains(&next) {
                    return Err(HavenError::invalid_pattern(
                        pattern,
                        format!("\\{} is not POSIX extended syntax", next as char),
                    ));
                }
            }
            i += 2;
            continue;
        }
        if in_class {
            if b == b'[' && bytes.get(i + 1) == Some(&b':') {
                if let Some(len) = pattern[i + 2..].find(":]") {
                    i += len + 4;
                    continue;
                }
            }
            if b == b']' {
                in_class = false;
            }
            i += 1;
            continue;
        }
        match b {
            b'[' => {
                in_class = true;
                i += 1;
                if bytes.get(i) == Some(&b'^') {
                    i += 1;
                }
                if bytes.get(i) == Some(&b']') {
                    i += 1;
                }
                continue;
            }
            b'(' if bytes.get(i + 1) == Some(&b'?') => {
                return Err(HavenError::invalid_pattern(
                    pattern,
                    "(? groups and flags are not POSIX extended syntax",
                ));
            }
            b'*' | b'+' | b'?' | b'}' if bytes.get(i + 1) == Some(&b'?') => {
                return Err(HavenError::invalid_pattern(
                    pattern,
                    "lazy repetition is not POSIX extended syntax",
                ));
            }
            _ => {}
        }
        i += 1;
    }
    Ok(())
}
