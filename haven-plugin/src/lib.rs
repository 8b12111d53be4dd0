//! Haven Plugin System
//!
//! Provides the `FunctionPlugin` trait, function metadata, the name→function
//! registry handed to a host template engine, and argument adaptation
//! helpers shared by the function libraries.

mod args;
mod context;
mod registry;
mod traits;

pub use args::{check_args, invoke, require_int, require_text, require_text_list};
pub use context::{EvalContext, TraceStep};
pub use registry::PluginRegistry;
pub use traits::{ArgMeta, FunctionMeta, FunctionPlugin, Signature};

/// Re-export core types for plugin authors
pub mod prelude {
    pub use crate::{
        check_args, invoke, require_int, require_text, require_text_list, ArgMeta, EvalContext,
        FunctionMeta, FunctionPlugin, PluginRegistry, Signature, TraceStep,
    };
    pub use haven_core::prelude::*;
}
