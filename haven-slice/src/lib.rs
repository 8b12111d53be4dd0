//! Haven Sequence Functions
//!
//! Selection, ordering and set operations over sequences of text, plus the
//! integer range generator `Seq`. As with the text functions, the operand
//! sequence is the last parameter.
//!
//! `Slice`, `Seq` and friends have preconditions that are enforced with
//! panics rather than error values; see each function's `# Panics` section.

mod generators;
mod helpers;
mod order;
mod select;
mod sets;

use haven_plugin::PluginRegistry;
use std::sync::Arc;
use tracing::debug;

pub use generators::seq;
pub use order::{reverse, sort, Shuffler};
pub use select::{grep, grep_compiled, head, slice, tail};
pub use sets::{intersect, union};

/// Number of functions registered by [`load_slice_library`]
pub const SLICE_FUNCTION_COUNT: usize = 10;

/// Load sequence functions into registry.
///
/// `Shuffle` draws from `shuffler`; hosts that build several registries can
/// hand them the same generator.
pub fn load_slice_library(registry: PluginRegistry, shuffler: Arc<Shuffler>) -> PluginRegistry {
    debug!(functions = SLICE_FUNCTION_COUNT, "loading slice library");
    registry
        // Select
        .with_function(select::Head)
        .with_function(select::Tail)
        .with_function(select::Slice)
        .with_function(select::Grep)

        // Order
        .with_function(order::Reverse)
        .with_function(order::Sort)
        .with_function(order::Shuffle::new(shuffler))

        // Sets
        .with_function(sets::Intersect)
        .with_function(sets::Union)

        // Generators
        .with_function(generators::Seq)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_slice_library() {
        let registry = load_slice_library(PluginRegistry::new(), Arc::new(Shuffler::new()));
        assert_eq!(registry.len(), SLICE_FUNCTION_COUNT);
        for name in ["Head", "Tail", "Slice", "Grep", "Reverse", "Sort", "Shuffle", "Intersect", "Union", "Seq"] {
            assert!(registry.contains(name), "missing {}", name);
        }
    }
}
