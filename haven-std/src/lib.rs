//! Haven Standard Library
//!
//! Integer math, time, regular expressions, base64 and parsing of
//! booleans, numbers and URLs.

pub mod functions;

use haven_plugin::PluginRegistry;
use tracing::debug;

/// Number of functions registered by [`load_standard_library`]
pub const STD_FUNCTION_COUNT: usize = 20;

/// Load standard library into registry
pub fn load_standard_library(registry: PluginRegistry) -> PluginRegistry {
    debug!(functions = STD_FUNCTION_COUNT, "loading standard library");
    registry
        // Math
        .with_function(functions::Abs)
        .with_function(functions::Add)
        .with_function(functions::Subtract)
        .with_function(functions::Multiply)
        .with_function(functions::Divide)
        .with_function(functions::Modulo)
        .with_function(functions::Min)
        .with_function(functions::Max)
        // Time
        .with_function(functions::Now)
        .with_function(functions::ParseTime)
        // Regex
        .with_function(functions::Matches)
        .with_function(functions::CompileRegex)
        .with_function(functions::CompileERE)
        .with_function(functions::QuoteRegex)
        // Encoding
        .with_function(functions::Base64Encode)
        .with_function(functions::Base64Decode)
        // Parsing
        .with_function(functions::ParseBool)
        .with_function(functions::ParseInt)
        .with_function(functions::ParseFloat)
        .with_function(functions::ParseURL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_standard_library() {
        let registry = load_standard_library(PluginRegistry::new());
        assert_eq!(registry.len(), STD_FUNCTION_COUNT);
        assert!(registry.contains("CompileERE"));
        assert!(registry.contains("ParseURL"));
    }
}
