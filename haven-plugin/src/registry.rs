//! Plugin Registry

use crate::{EvalContext, FunctionMeta, FunctionPlugin, Signature};
use haven_core::{HavenError, Value};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::{trace, warn};

/// Central function registry.
///
/// Names are exact and case-sensitive. The registry is assembled with the
/// consuming `with_function` builder and is read-only afterwards.
pub struct PluginRegistry {
    functions: HashMap<String, Arc<dyn FunctionPlugin>>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self {
            functions: HashMap::new(),
        }
    }

    /// Register a function.
    ///
    /// # Panics
    ///
    /// Panics if a function with the same name is already registered.
    pub fn with_function<F: FunctionPlugin + 'static>(mut self, f: F) -> Self {
        let name = f.meta().name.to_string();
        assert!(
            !self.functions.contains_key(&name),
            "function {} registered twice",
            name
        );
        self.functions.insert(name, Arc::new(f));
        self
    }

    pub fn lookup(&self, name: &str) -> Option<&dyn FunctionPlugin> {
        self.functions.get(name).map(|f| f.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// All registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.functions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn call_function(&self, name: &str, args: &[Value], ctx: &EvalContext) -> Value {
        match self.lookup(name) {
            Some(f) => {
                trace!(function = name, arity = args.len(), "calling");
                f.call(args, ctx)
            }
            None => {
                warn!(function = name, "unknown function");
                // Find similar function names for better error message
                let similar = self.find_similar_functions(name);
                let mut err = HavenError::undefined_func(name);
                if !similar.is_empty() {
                    let suggestions: Vec<&str> = similar.iter().take(5).map(|s| s.as_str()).collect();
                    err = err.with_suggestion(format!(
                        "Similar: {}. Names are case-sensitive.",
                        suggestions.join(", ")
                    ));
                }
                Value::Error(err)
            }
        }
    }

    /// Find function names similar to the given name (for error suggestions)
    fn find_similar_functions(&self, name: &str) -> Vec<String> {
        let name_lower = name.to_lowercase();
        let mut matches: Vec<(String, usize)> = self
            .functions
            .keys()
            .filter_map(|func_name| {
                let score = Self::similarity_score(&name_lower, &func_name.to_lowercase());
                if score > 0 {
                    Some((func_name.clone(), score))
                } else {
                    None
                }
            })
            .collect();

        // Highest score first, ties by name
        matches.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        matches.into_iter().map(|(name, _)| name).collect()
    }

    /// Calculate similarity score between two lowercase strings
    fn similarity_score(query: &str, candidate: &str) -> usize {
        let mut score = 0;

        if candidate == query {
            score += 200;
        } else if candidate.starts_with(query) {
            score += 100;
        } else if candidate.contains(query) {
            score += 50;
        } else if query.contains(candidate) {
            score += 30;
        }

        let query_chars: HashSet<char> = query.chars().collect();
        let candidate_chars: HashSet<char> = candidate.chars().collect();
        let common = query_chars.intersection(&candidate_chars).count();
        if common * 2 >= query_chars.len().max(1) {
            score += common * 2;
        }

        // Penalize length difference
        let len_diff = query.len().abs_diff(candidate.len());
        if len_diff < 5 && score > 0 {
            score += 5 - len_diff;
        }

        score
    }

    pub fn help(&self, name: Option<&str>) -> Value {
        match name {
            Some(n) => self.help_for(n),
            None => self.general_help(),
        }
    }

    fn help_for(&self, name: &str) -> Value {
        match self.functions.get(name) {
            Some(f) => Value::Object(Self::function_to_help(f.meta())),
            None => Value::Error(HavenError::not_found(name)),
        }
    }

    fn general_help(&self) -> Value {
        let mut help = HashMap::new();

        let mut funcs_by_cat: HashMap<String, Vec<String>> = HashMap::new();
        for (name, f) in &self.functions {
            let cat = f.meta().category.to_string();
            funcs_by_cat.entry(cat).or_default().push(name.clone());
        }
        help.insert(
            "functions".to_string(),
            Value::Object(
                funcs_by_cat
                    .into_iter()
                    .map(|(k, mut v)| {
                        v.sort();
                        (k, Value::from(v))
                    })
                    .collect(),
            ),
        );

        help.insert(
            "usage".to_string(),
            Value::Text("Call help(\"Name\") for detailed help.".to_string()),
        );

        Value::Object(help)
    }

    fn function_to_help(meta: FunctionMeta) -> HashMap<String, Value> {
        let mut help = HashMap::new();
        help.insert("name".to_string(), Value::from(meta.name));
        help.insert("description".to_string(), Value::from(meta.description));
        help.insert("usage".to_string(), Value::from(meta.usage));
        help.insert("returns".to_string(), Value::from(meta.returns));
        help.insert("fallible".to_string(), Value::Bool(meta.fallible));
        help.insert("category".to_string(), Value::from(meta.category));
        help.insert(
            "args".to_string(),
            Value::List(
                meta.args
                    .iter()
                    .map(|a| {
                        let mut arg = HashMap::new();
                        arg.insert("name".to_string(), Value::from(a.name));
                        arg.insert("type".to_string(), Value::from(a.typ));
                        arg.insert("description".to_string(), Value::from(a.description));
                        arg.insert("optional".to_string(), Value::Bool(a.optional));
                        if let Some(default) = a.default {
                            arg.insert("default".to_string(), Value::from(default));
                        }
                        Value::Object(arg)
                    })
                    .collect(),
            ),
        );
        help.insert("examples".to_string(), Value::from(meta.examples.to_vec()));
        help.insert("related".to_string(), Value::from(meta.related.to_vec()));
        help
    }

    pub fn list_functions(&self, category: Option<&str>) -> Value {
        let mut metas: Vec<FunctionMeta> = self
            .functions
            .values()
            .map(|f| f.meta())
            .filter(|m| category.map_or(true, |c| m.category == c))
            .collect();
        metas.sort_by_key(|m| m.name);
        let funcs: Vec<Value> = metas
            .into_iter()
            .map(|meta| {
                let mut obj = HashMap::new();
                obj.insert("name".to_string(), Value::from(meta.name));
                obj.insert("description".to_string(), Value::from(meta.description));
                obj.insert("usage".to_string(), Value::from(meta.usage));
                obj.insert("category".to_string(), Value::from(meta.category));
                Value::Object(obj)
            })
            .collect();
        Value::List(funcs)
    }

    /// Calling conventions of every function, sorted by name
    pub fn signatures(&self) -> Vec<Signature> {
        let mut sigs: Vec<Signature> = self.functions.values().map(|f| f.meta().signature()).collect();
        sigs.sort_by_key(|s| s.name);
        sigs
    }
}

impl Default for PluginRegistry {
    fn default() -> Self {
        Self::new()
    }
}
