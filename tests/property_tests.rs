//! Property-based tests - pragmatic checks of the builder's invariants
//! across generated inputs, complementing the scenario tests.

use proptest::prelude::*;
use toml_builder::{Error, TomlBuilder, Value};

fn key_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,8}"
}

proptest! {
    // Every integer renders on its own decimal line
    #[test]
    fn prop_integer_line(key in key_strategy(), n in any::<i64>()) {
        let mut builder = TomlBuilder::new();
        builder.add_value(&key, n, None).unwrap();
        prop_assert_eq!(builder.as_str(), format!("{} = {}\n", key, n));
    }

    // The escaper accepts every string; a successful add emits exactly one
    // line, so embedded newlines never leak into the document structure
    #[test]
    fn prop_any_string_is_accepted(key in key_strategy(), s in any::<String>()) {
        let mut builder = TomlBuilder::new();
        builder.add_value(&key, s, None).unwrap();

        let doc = builder.as_str();
        prop_assert!(doc.ends_with('\n'));
        prop_assert_eq!(doc.matches('\n').count(), 1);
    }

    // Booleans render as their literals
    #[test]
    fn prop_bool_line(key in key_strategy(), b in any::<bool>()) {
        let mut builder = TomlBuilder::new();
        builder.add_value(&key, b, None).unwrap();
        prop_assert_eq!(builder.as_str(), format!("{} = {}\n", key, b));
    }

    // A second registration of the same key always fails and leaves the
    // document untouched
    #[test]
    fn prop_duplicate_always_fails(key in key_strategy(), a in any::<i64>(), b in any::<i64>()) {
        let mut builder = TomlBuilder::new();
        builder.add_value(&key, a, None).unwrap();
        let snapshot = builder.as_str().to_string();

        let err = builder.add_value(&key, b, None).unwrap_err();
        prop_assert_eq!(err, Error::DuplicateKey(key));
        prop_assert_eq!(builder.as_str(), snapshot);
    }

    // Homogeneous integer arrays render as comma-space joined literals
    #[test]
    fn prop_integer_array(key in key_strategy(), items in prop::collection::vec(any::<i64>(), 0..20)) {
        let mut builder = TomlBuilder::new();
        builder.add_value(&key, items.clone(), None).unwrap();

        let joined = items
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        prop_assert_eq!(builder.as_str(), format!("{} = [{}]\n", key, joined));
    }

    // Mixing a string into an integer array always fails
    #[test]
    fn prop_mixed_array_always_fails(key in key_strategy(), n in any::<i64>(), s in any::<String>()) {
        let mut builder = TomlBuilder::new();
        let mixed = Value::Array(vec![Value::Integer(n), Value::String(s)]);
        let err = builder.add_value(&key, mixed, None).unwrap_err();
        prop_assert_eq!(err, Error::MixedArrayType(key));
        prop_assert_eq!(builder.as_str(), "");
    }

    // One successful call, one line: the document always has as many lines
    // as accepted values (no keygroups involved at top level)
    #[test]
    fn prop_line_per_value(values in prop::collection::vec(any::<i64>(), 1..30)) {
        let mut builder = TomlBuilder::new();
        for (i, n) in values.iter().enumerate() {
            builder.add_value(&format!("key_{}", i), *n, None).unwrap();
        }
        prop_assert_eq!(builder.as_str().matches('\n').count(), values.len());
    }
}
