//! Recursive removal of empty optional structure
//!
//! Empty strings and nulls disappear, then any list or object left with
//! nothing in it disappears too. `false` and `0` are real answers on the form
//! and always survive.

use serde_json::{Map, Value};

/// Prune `value`, returning `None` when nothing meaningful is left
pub fn prune(value: &Value) -> Option<Value> {
    match value {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::Bool(_) | Value::Number(_) | Value::String(_) => Some(value.clone()),
        Value::Array(items) => {
            let kept: Vec<Value> = items
                .iter()
                .filter_map(prune)
                .filter(|v| !is_empty_object(v))
                .collect();
            (!kept.is_empty()).then_some(Value::Array(kept))
        }
        Value::Object(map) => {
            let kept: Map<String, Value> = map
                .iter()
                .filter_map(|(key, v)| {
                    prune(v)
                        .filter(|v| !is_empty_object(v))
                        .map(|v| (key.clone(), v))
                })
                .collect();
            (!kept.is_empty()).then_some(Value::Object(kept))
        }
    }
}

/// Prune an object, falling back to `{}` when everything prunes away
pub fn prune_object(value: &Value) -> Map<String, Value> {
    match prune(value) {
        Some(Value::Object(map)) => map,
        _ => Map::new(),
    }
}

fn is_empty_object(value: &Value) -> bool {
    matches!(value, Value::Object(map) if map.is_empty())
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn json_value() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            (-3i64..3).prop_map(Value::from),
            "[ab ]{0,2}".prop_map(Value::String),
        ];
        leaf.prop_recursive(4, 64, 6, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
                prop::collection::btree_map("[a-d]", inner, 0..6)
                    .prop_map(|m| Value::Object(m.into_iter().collect())),
            ]
        })
    }

    fn has_empty_leftovers(value: &Value) -> bool {
        match value {
            Value::Null => true,
            Value::String(s) => s.is_empty(),
            Value::Bool(_) | Value::Number(_) => false,
            Value::Array(items) => items.is_empty() || items.iter().any(has_empty_leftovers),
            Value::Object(map) => map.is_empty() || map.values().any(has_empty_leftovers),
        }
    }

    proptest! {
        /// Property: pruning twice is the same as pruning once
        #[test]
        fn prune_is_idempotent(value in json_value()) {
            let once = prune(&value);
            let twice = once.as_ref().and_then(prune);
            prop_assert_eq!(once, twice);
        }

        /// Property: nothing empty survives anywhere in the output
        #[test]
        fn pruned_output_has_no_empties(value in json_value()) {
            if let Some(pruned) = prune(&value) {
                prop_assert!(!has_empty_leftovers(&pruned));
            }
        }

        /// Property: booleans and numbers are never dropped at the top level
        #[test]
        fn scalars_survive(b in any::<bool>(), n in any::<i64>()) {
            prop_assert_eq!(prune(&Value::Bool(b)), Some(Value::Bool(b)));
            prop_assert_eq!(prune(&Value::from(n)), Some(Value::from(n)));
        }
    }
}
