//! Reordering: Reverse, Sort, Shuffle

use crate::helpers::call_seq;
use haven_plugin::prelude::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::debug;

pub fn reverse<T: Clone>(operand: &[T]) -> Vec<T> {
    operand.iter().rev().cloned().collect()
}

/// Ascending byte-lexical order, stable.
pub fn sort<S: AsRef<str>>(operand: &[S]) -> Vec<String> {
    let mut out: Vec<String> = operand.iter().map(|s| s.as_ref().to_string()).collect();
    out.sort();
    out
}

/// Shared pseudo-random generator behind `Shuffle`.
///
/// Seeded once from the wall clock, so permutations differ between runs.
/// Not suitable for anything security related.
pub struct Shuffler {
    rng: Mutex<StdRng>,
}

impl Shuffler {
    pub fn new() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        debug!(seed, "seeding shuffle generator");
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// A new sequence holding a random permutation of `operand`.
    pub fn shuffle<T: Clone>(&self, operand: &[T]) -> Vec<T> {
        let mut out = operand.to_vec();
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        out.shuffle(&mut *rng);
        out
    }
}

impl Default for Shuffler {
    fn default() -> Self {
        Self::new()
    }
}

// ============ Plugins ============

static SEQ_ARGS: [ArgMeta; 1] = [ArgMeta::required("operand", "List<Text>", "Source sequence")];

pub struct Reverse;

impl FunctionPlugin for Reverse {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "Reverse",
            description: "New sequence with the elements of operand in reverse order",
            usage: "Reverse operand",
            args: &SEQ_ARGS,
            returns: "List<Text>",
            fallible: false,
            examples: &["[a b c] | Reverse → [c b a]"],
            category: "slice/order",
            related: &["Sort", "Shuffle"],
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        call_seq("Reverse", args, reverse)
    }
}

pub struct Sort;

impl FunctionPlugin for Sort {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "Sort",
            description: "New sequence with the elements of operand in ascending order",
            usage: "Sort operand",
            args: &SEQ_ARGS,
            returns: "List<Text>",
            fallible: false,
            examples: &["[pear apple fig] | Sort → [apple fig pear]"],
            category: "slice/order",
            related: &["Reverse"],
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        call_seq("Sort", args, sort)
    }
}

pub struct Shuffle {
    shuffler: Arc<Shuffler>,
}

impl Shuffle {
    pub fn new(shuffler: Arc<Shuffler>) -> Self {
        Self { shuffler }
    }
}

impl FunctionPlugin for Shuffle {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "Shuffle",
            description: "New sequence with the elements of operand in random order",
            usage: "Shuffle operand",
            args: &SEQ_ARGS,
            returns: "List<Text>",
            fallible: false,
            examples: &["[a b c] | Shuffle → [b c a]"],
            category: "slice/order",
            related: &["Sort"],
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        call_seq("Shuffle", args, |operand| self.shuffler.shuffle(operand))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval_ctx() -> EvalContext {
        EvalContext::new(Arc::new(PluginRegistry::new()))
    }

    #[test]
    fn test_reverse() {
        let s = vec!["a", "b", "c"];
        assert_eq!(reverse(&s), vec!["c", "b", "a"]);
        assert_eq!(s, vec!["a", "b", "c"]);
        assert!(reverse::<&str>(&[]).is_empty());
    }

    #[test]
    fn test_sort_is_byte_lexical() {
        assert_eq!(sort(&["pear", "Apple", "apple", "fig"]), vec!["Apple", "apple", "fig", "pear"]);
        assert_eq!(sort(&["b", "a", "b"]), vec!["a", "b", "b"]);
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let shuffler = Shuffler::new();
        let s: Vec<String> = (0..50).map(|i| i.to_string()).collect();
        let mut shuffled = shuffler.shuffle(&s);
        shuffled.sort();
        let mut expected = s.clone();
        expected.sort();
        assert_eq!(shuffled, expected);
        assert!(shuffler.shuffle::<String>(&[]).is_empty());
        assert_eq!(shuffler.shuffle(&["only"]), vec!["only"]);
    }

    #[test]
    fn test_shuffle_plugin_shares_generator() {
        let shuffler = Arc::new(Shuffler::new());
        let plugin = Shuffle::new(Arc::clone(&shuffler));
        let input = Value::from(vec!["x", "y", "z"]);
        let result = plugin.call(&[input], &eval_ctx());
        let mut items = result.as_text_list().unwrap();
        items.sort_unstable();
        assert_eq!(items, vec!["x", "y", "z"]);
        assert_eq!(Arc::strong_count(&shuffler), 2);
    }

    #[test]
    fn test_sort_plugin_rejects_non_list() {
        let result = Sort.call(&[Value::from("abc")], &eval_ctx());
        assert_eq!(result.as_error().unwrap().kind, ErrorKind::ArgType);
    }
}
