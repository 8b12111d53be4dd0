//! Registry-level integration tests: the name set, dispatch and pipelines.

use haven::{args, catalog_json, standard_registry, ErrorKind, Haven, Value};

const ALL_NAMES: [&str; 59] = [
    "Abs", "Add", "Base64Decode", "Base64Encode", "CompileERE", "CompileRegex", "Contains",
    "ContainsAny", "Count", "Divide", "Fields", "Grep", "HasPrefix", "HasSuffix", "Head", "Index",
    "IndexAny", "Intersect", "Join", "LastIndex", "LastIndexAny", "Lines", "Matches", "Max", "Min",
    "Modulo", "Multiply", "Now", "ParseBool", "ParseFloat", "ParseInt", "ParseTime", "ParseURL",
    "Quote", "QuoteRegex", "Repeat", "Replace", "Reverse", "Seq", "Shuffle", "Slice", "Sort",
    "Split", "SplitAfter", "SplitAfterN", "SplitN", "Subtract", "Tail", "Title", "ToLower",
    "ToUpper", "Trim", "TrimLeft", "TrimPrefix", "TrimRight", "TrimSpace", "TrimSuffix", "Union",
    "Unquote",
];

const FALLIBLE: [&str; 12] = [
    "Base64Decode", "CompileERE", "CompileRegex", "Grep", "Lines", "Matches", "ParseBool",
    "ParseFloat", "ParseInt", "ParseTime", "ParseURL", "Unquote",
];

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

#[test]
fn test_registry_holds_exactly_the_name_set() {
    init_tracing();
    let registry = standard_registry();
    assert_eq!(registry.names(), ALL_NAMES.to_vec());
    for name in ALL_NAMES {
        let f = registry.lookup(name).unwrap_or_else(|| panic!("{} not registered", name));
        assert_eq!(f.meta().name, name);
    }
}

#[test]
fn test_lookup_is_case_sensitive() {
    let registry = standard_registry();
    for name in ["split", "SPLIT", "toupper", "parseurl", "Base64encode"] {
        assert!(registry.lookup(name).is_none(), "{} should not resolve", name);
    }
}

#[test]
fn test_operand_is_always_last_parameter() {
    let registry = standard_registry();
    for sig in registry.signatures() {
        if let Some(last) = sig.params.last() {
            if sig.name != "Seq" && !sig.name.starts_with("Compile") {
                assert_eq!(*last, "operand", "{} should take its operand last", sig.name);
            }
        }
    }
}

#[test]
fn test_error_indicator_matches_signatures() {
    let registry = standard_registry();
    for sig in registry.signatures() {
        let expected = FALLIBLE.contains(&sig.name);
        assert_eq!(sig.fallible, expected, "{}", sig.name);
    }
}

#[test]
fn test_catalog_lists_every_function() {
    let catalog = catalog_json(&standard_registry());
    let names: Vec<&str> = catalog["functions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ALL_NAMES.to_vec());

    let seq = catalog["functions"].as_array().unwrap().iter().find(|f| f["name"] == "Seq").unwrap();
    assert_eq!(seq["variadic"], true);
}

#[test]
fn test_pipeline_of_text_and_slice_functions() {
    init_tracing();
    let haven = Haven::with_standard_library();
    let result = haven.pipe(
        Value::from("pear, Apple ,fig,apple"),
        &[
            ("Split", args![","]),
            ("Sort", args![]),
            ("Tail", args![2i64]),
            ("Join", args!["|"]),
            ("ToUpper", args![]),
        ],
    );
    assert_eq!(result, Value::from("FIG|PEAR"));
}

#[test]
fn test_pipeline_propagates_errors_unchanged() {
    let haven = Haven::with_standard_library();
    let decoded = haven.pipe(
        Value::from("not-valid-base64!!"),
        &[("Base64Decode", args![]), ("ToUpper", args![]), ("Split", args![","])],
    );
    let direct = haven.call("Base64Decode", &args!["not-valid-base64!!"]);
    assert_eq!(decoded, direct);
    assert_eq!(decoded.as_error().unwrap().kind, ErrorKind::InvalidEncoding);
}

#[test]
fn test_grep_through_registry() {
    let haven = Haven::with_standard_library();
    let animals = Value::from(vec!["dog", "cat", "deer"]);
    let result = haven.call("Grep", &[Value::from("^d"), animals.clone()]);
    assert_eq!(result.as_text_list(), Some(vec!["dog", "deer"]));

    let result = haven.call("Grep", &[Value::from("[[:bogus:]]"), animals]);
    assert_eq!(result.as_error().unwrap().kind, ErrorKind::InvalidPattern);
}

#[test]
fn test_seq_through_registry() {
    let haven = Haven::with_standard_library();
    assert_eq!(haven.call("Seq", &args![3i64, 13i64, 3i64]), Value::from(vec![3i64, 6, 9, 12]));
    assert_eq!(haven.call("Seq", &args![4i64, 0i64]), Value::List(vec![]));
}

#[test]
#[should_panic(expected = "Divide by zero")]
fn test_divide_by_zero_panics_through_registry() {
    let haven = Haven::with_standard_library();
    haven.call("Divide", &args![0i64, 10i64]);
}

#[test]
fn test_parse_url_renders_as_url() {
    let haven = Haven::with_standard_library();
    let url = haven.call("ParseURL", &args!["https://example.com/a?b=c"]);
    assert_eq!(url.get("host"), Value::from("example.com"));
    assert_eq!(url.to_string(), "https://example.com/a?b=c");
}

#[test]
fn test_parse_url_accepts_relative_reference() {
    let haven = Haven::with_standard_library();
    let url = haven.call("ParseURL", &args!["/search?q=1"]);
    assert!(!url.is_error());
    assert!(url.get("scheme").is_null());
    assert_eq!(url.get("query"), Value::from("q=1"));
    assert_eq!(url.to_string(), "/search?q=1");
}
