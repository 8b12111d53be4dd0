//! Property-based tests for the typed function APIs.

use haven::slice::{head, intersect, reverse, seq, sort, tail, union, Shuffler};
use haven::stdlib::functions::{base64_decode, base64_encode, parse_int};
use haven::text::{join, quote, split, unquote};
use proptest::prelude::*;
use std::collections::BTreeSet;

fn words() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-e]{0,3}", 0..16)
}

fn distinct(items: &[String]) -> BTreeSet<&str> {
    items.iter().map(String::as_str).collect()
}

proptest! {
    #[test]
    fn reverse_is_an_involution(s in words()) {
        prop_assert_eq!(reverse(&reverse(&s)), s);
    }

    #[test]
    fn sort_orders_a_permutation(s in words()) {
        let sorted = sort(&s);
        prop_assert!(sorted.windows(2).all(|w| w[0] <= w[1]));
        let mut expected = s.clone();
        expected.sort();
        prop_assert_eq!(sorted, expected);
    }

    #[test]
    fn head_and_tail_clamp(s in words(), n in -5i64..25) {
        let h = head(n, &s);
        let t = tail(n, &s);
        if n <= 0 {
            prop_assert!(h.is_empty() && t.is_empty());
        } else if n as usize >= s.len() {
            prop_assert_eq!(&h, &s);
            prop_assert_eq!(&t, &s);
        } else {
            prop_assert_eq!(h.len(), n as usize);
            prop_assert_eq!(&h[..], &s[..n as usize]);
            prop_assert_eq!(&t[..], &s[s.len() - n as usize..]);
        }
    }

    #[test]
    fn set_operations_follow_set_semantics(a in words(), b in words()) {
        let (sa, sb) = (distinct(&a), distinct(&b));

        let i = intersect(&a, &b);
        prop_assert_eq!(distinct(&i).len(), i.len());
        let expected: BTreeSet<&str> = sa.intersection(&sb).copied().collect();
        prop_assert_eq!(distinct(&i), expected);

        let u = union(&a, &b);
        prop_assert_eq!(distinct(&u).len(), u.len());
        let expected: BTreeSet<&str> = sa.union(&sb).copied().collect();
        prop_assert_eq!(distinct(&u), expected);

        let again = union(&u, &u);
        prop_assert_eq!(distinct(&again), distinct(&u));
        let again = intersect(&i, &i);
        prop_assert_eq!(again.len(), i.len());
        prop_assert_eq!(distinct(&again), distinct(&i));
    }

    #[test]
    fn shuffle_is_a_permutation(s in words()) {
        let shuffler = Shuffler::new();
        let mut shuffled = shuffler.shuffle(&s);
        shuffled.sort();
        let mut expected = s.clone();
        expected.sort();
        prop_assert_eq!(shuffled, expected);
    }

    #[test]
    fn seq_steps_stay_in_bounds(
        first in -50i64..50,
        last in -50i64..50,
        step in prop_oneof![1i64..6, -5i64..0],
    ) {
        let values = seq(first, last, &[step]);
        let (lo, hi) = (first.min(last), first.max(last));
        prop_assert!(values.iter().all(|v| (lo..=hi).contains(v)));
        prop_assert!(values.windows(2).all(|w| w[1] - w[0] == step));
        let forward = (step > 0 && first <= last) || (step < 0 && first >= last);
        prop_assert_eq!(values.first().copied(), if forward { Some(first) } else { None });
    }

    #[test]
    fn join_inverts_split(sep in prop_oneof![Just(""), Just(","), Just("--"), Just("é")], x in ".{0,24}") {
        prop_assert_eq!(join(sep, &split(sep, &x)), x);
    }

    #[test]
    fn base64_round_trips(x in any::<String>()) {
        prop_assert_eq!(base64_decode(&base64_encode(&x)).unwrap(), x);
    }

    #[test]
    fn unquote_inverts_quote(x in any::<String>()) {
        prop_assert_eq!(unquote(&quote(&x)).unwrap(), x);
    }

    #[test]
    fn parse_int_reads_i32_decimal(n in any::<i32>()) {
        prop_assert_eq!(parse_int(&n.to_string()).unwrap(), i64::from(n));
    }
}
