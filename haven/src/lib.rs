//! Haven - template functions with the operand last
//!
//! Every function takes its modifiers first and the value it operates on
//! last, so a host template engine can chain calls left to right:
//!
//! ```text
//! {{ "dogs,cats" | Split "," | Join "\n" }}
//! ```
//!
//! [`standard_registry`] builds the complete name → function map that a host
//! engine installs. [`Haven`] wraps it with direct calls and a pipe runner.

use serde_json::json;
use std::sync::Arc;
use tracing::debug;

pub use haven_core::{codes, ErrorKind, Flavor, HavenError, Pattern, Value};
pub use haven_plugin::{EvalContext, FunctionMeta, FunctionPlugin, PluginRegistry, Signature, TraceStep};
pub use haven_slice::Shuffler;

pub use haven_slice as slice;
pub use haven_std as stdlib;
pub use haven_text as text;

/// Registry holding every Haven function, with a freshly seeded shuffle generator.
pub fn standard_registry() -> PluginRegistry {
    registry_with_shuffler(Arc::new(Shuffler::new()))
}

/// Like [`standard_registry`], drawing `Shuffle` permutations from `shuffler`.
pub fn registry_with_shuffler(shuffler: Arc<Shuffler>) -> PluginRegistry {
    let registry = PluginRegistry::new();
    let registry = haven_text::load_text_library(registry);
    let registry = haven_slice::load_slice_library(registry, shuffler);
    let registry = haven_std::load_standard_library(registry);
    debug!(functions = registry.len(), "standard registry assembled");
    registry
}

/// Calling conventions of every function in `registry`, as JSON.
pub fn catalog_json(registry: &PluginRegistry) -> serde_json::Value {
    let functions: Vec<serde_json::Value> = registry
        .signatures()
        .into_iter()
        .map(|sig| {
            json!({
                "name": sig.name,
                "params": sig.params,
                "variadic": sig.variadic,
                "returns": sig.returns,
                "fallible": sig.fallible,
            })
        })
        .collect();
    json!({
        "count": functions.len(),
        "functions": functions,
    })
}

/// Outcome of a pipeline run
#[derive(Debug, Clone)]
pub struct PipeResult {
    pub value: Value,
    /// Calls made, when tracing is enabled
    pub trace: Vec<TraceStep>,
}

/// Main Haven engine
pub struct Haven {
    registry: Arc<PluginRegistry>,
    tracing: bool,
}

impl Haven {
    pub fn new(registry: PluginRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
            tracing: false,
        }
    }

    pub fn with_standard_library() -> Self {
        Self::new(standard_registry())
    }

    /// Record every call made by [`Haven::run_pipe`]
    pub fn with_tracing(mut self, enabled: bool) -> Self {
        self.tracing = enabled;
        self
    }

    pub fn registry(&self) -> &Arc<PluginRegistry> {
        &self.registry
    }

    fn context(&self) -> EvalContext {
        EvalContext::new(Arc::clone(&self.registry)).with_tracing(self.tracing)
    }

    /// Call one function by name.
    pub fn call(&self, name: &str, args: &[Value]) -> Value {
        self.registry.call_function(name, args, &self.context())
    }

    /// Thread `operand` through `stages`, left to right.
    ///
    /// Each stage is a function name and its leading arguments; the previous
    /// result is appended as the final argument. An error value stops the
    /// pipeline and is returned unchanged.
    pub fn pipe(&self, operand: Value, stages: &[(&str, Vec<Value>)]) -> Value {
        self.run_pipe(operand, stages).value
    }

    /// [`Haven::pipe`], also returning the trace of calls made.
    pub fn run_pipe(&self, operand: Value, stages: &[(&str, Vec<Value>)]) -> PipeResult {
        let mut ctx = self.context();
        let mut current = operand;
        for (name, args) in stages {
            if current.is_error() {
                break;
            }
            let mut call_args = Vec::with_capacity(args.len() + 1);
            call_args.extend_from_slice(args);
            call_args.push(current);
            current = ctx.call(name, &call_args);
        }
        PipeResult {
            value: current,
            trace: ctx.trace,
        }
    }

    pub fn help(&self, name: Option<&str>) -> Value {
        self.registry.help(name)
    }

    pub fn list_functions(&self, category: Option<&str>) -> Value {
        self.registry.list_functions(category)
    }

    /// All registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        self.registry.names()
    }

    pub fn catalog(&self) -> serde_json::Value {
        catalog_json(&self.registry)
    }
}

impl Default for Haven {
    fn default() -> Self {
        Self::with_standard_library()
    }
}

/// Build an argument list, converting each element with `Value::from`.
#[macro_export]
macro_rules! args {
    () => { Vec::<$crate::Value>::new() };
    ($($value:expr),+ $(,)?) => {
        vec![$($crate::Value::from($value)),+]
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_haven() -> Haven {
        Haven::with_standard_library()
    }

    #[test]
    fn test_call_operand_last() {
        let haven = test_haven();
        assert_eq!(haven.call("Subtract", &args![2i64, 10i64]), Value::Int(8));
        assert_eq!(haven.call("TrimPrefix", &args!["x", "xxhi"]), Value::from("xhi"));
    }

    #[test]
    fn test_pipe_split_join() {
        let haven = test_haven();
        let result = haven.pipe(
            Value::from("dogs,cats,horses"),
            &[("Split", args![","]), ("Join", args!["\n"])],
        );
        assert_eq!(result, Value::from("dogs\ncats\nhorses"));
    }

    #[test]
    fn test_pipe_short_circuits_on_error() {
        let haven = test_haven().with_tracing(true);
        let outcome = haven.run_pipe(
            Value::from("not a number"),
            &[("ParseInt", args![]), ("Add", args![1i64]), ("Multiply", args![2i64])],
        );
        assert_eq!(outcome.value.as_error().unwrap().kind, ErrorKind::MalformedNumber);
        assert_eq!(outcome.trace.len(), 1);
        assert_eq!(outcome.trace[0].function, "ParseInt");
    }

    #[test]
    fn test_pipe_without_stages_returns_operand() {
        assert_eq!(test_haven().pipe(Value::from("x"), &[]), Value::from("x"));
    }

    #[test]
    fn test_unknown_function() {
        let result = test_haven().call("split", &args![",", "a,b"]);
        let err = result.as_error().unwrap();
        assert_eq!(err.kind, ErrorKind::UndefinedFunc);
        assert!(err.suggestion.as_deref().unwrap_or("").contains("Split"));
    }

    #[test]
    fn test_catalog_json() {
        let catalog = test_haven().catalog();
        assert_eq!(catalog["count"], 59);
        let functions = catalog["functions"].as_array().unwrap();
        let replace = functions.iter().find(|f| f["name"] == "Replace").unwrap();
        assert_eq!(replace["params"], json!(["old", "new", "n", "operand"]));
        assert_eq!(replace["fallible"], false);
    }

    #[test]
    fn test_help_includes_category() {
        let help = test_haven().help(Some("Grep"));
        assert_eq!(help.get("category"), Value::from("slice/select"));
        assert_eq!(help.get("fallible"), Value::Bool(true));
    }
}
