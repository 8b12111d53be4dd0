//! Evaluation Context

use crate::PluginRegistry;
use haven_core::Value;
use std::sync::Arc;

/// Evaluation context passed to plugins
pub struct EvalContext {
    pub registry: Arc<PluginRegistry>,
    pub tracing: bool,
    pub trace: Vec<TraceStep>,
}

/// Single call in an evaluation trace
#[derive(Debug, Clone)]
pub struct TraceStep {
    pub function: String,
    pub args: Vec<Value>,
    pub result: Value,
}

impl EvalContext {
    pub fn new(registry: Arc<PluginRegistry>) -> Self {
        Self {
            registry,
            tracing: false,
            trace: Vec::new(),
        }
    }

    pub fn with_tracing(mut self, enabled: bool) -> Self {
        self.tracing = enabled;
        self
    }

    /// Call a registered function by name, recording the call when tracing.
    pub fn call(&mut self, name: &str, args: &[Value]) -> Value {
        let registry = Arc::clone(&self.registry);
        let result = registry.call_function(name, args, self);
        self.record_trace(name, args, &result);
        result
    }

    pub fn record_trace(&mut self, function: &str, args: &[Value], result: &Value) {
        if self.tracing {
            self.trace.push(TraceStep {
                function: function.to_string(),
                args: args.to_vec(),
                result: result.clone(),
            });
        }
    }
}
