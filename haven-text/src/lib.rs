//! Haven Text Functions
//!
//! Argument-reordered adapters over the standard string operations. The
//! operand is always the last parameter so calls chain left to right in a
//! pipe-style template.

mod helpers;
mod quote;
mod search;
mod split;
mod transform;

use haven_plugin::PluginRegistry;
use tracing::debug;

pub use quote::{quote, unquote};
pub use search::{
    contains, contains_any, count, has_prefix, has_suffix, index, index_any, last_index,
    last_index_any,
};
pub use split::{fields, join, lines, split, split_after, split_after_n, split_n};
pub use transform::{
    repeat, replace, title, to_lower, to_upper, trim, trim_left, trim_prefix, trim_right,
    trim_space, trim_suffix,
};

/// Number of functions registered by [`load_text_library`]
pub const TEXT_FUNCTION_COUNT: usize = 29;

/// Load text functions into registry
pub fn load_text_library(registry: PluginRegistry) -> PluginRegistry {
    debug!(functions = TEXT_FUNCTION_COUNT, "loading text library");
    registry
        // Search (9 functions)
        .with_function(search::Contains)
        .with_function(search::ContainsAny)
        .with_function(search::Count)
        .with_function(search::HasPrefix)
        .with_function(search::HasSuffix)
        .with_function(search::Index)
        .with_function(search::IndexAny)
        .with_function(search::LastIndex)
        .with_function(search::LastIndexAny)

        // Split (7 functions)
        .with_function(split::Split)
        .with_function(split::SplitAfter)
        .with_function(split::SplitAfterN)
        .with_function(split::SplitN)
        .with_function(split::Fields)
        .with_function(split::Lines)
        .with_function(split::Join)

        // Transform (11 functions)
        .with_function(transform::Title)
        .with_function(transform::ToLower)
        .with_function(transform::ToUpper)
        .with_function(transform::Repeat)
        .with_function(transform::Replace)
        .with_function(transform::Trim)
        .with_function(transform::TrimLeft)
        .with_function(transform::TrimRight)
        .with_function(transform::TrimPrefix)
        .with_function(transform::TrimSuffix)
        .with_function(transform::TrimSpace)

        // Quote (2 functions)
        .with_function(quote::Quote)
        .with_function(quote::Unquote)
}
