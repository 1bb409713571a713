//! Numeric coercions for loosely typed form values

use inspection_types::FormScalar;
use serde_json::{Number, Value};
use tracing::trace;

/// Reduce selected inspector entries to numeric ids.
///
/// Digit-only strings become integers and numbers are kept as they are.
/// Anything else is skipped without complaint.
pub fn extract_inspector_ids(entries: &[Value]) -> Vec<Number> {
    entries
        .iter()
        .filter_map(|entry| {
            let id = match entry {
                Value::Number(n) => Some(n.clone()),
                Value::String(s) if is_digit_only(s) => parse_number(s),
                _ => None,
            };
            if id.is_none() {
                trace!("Skipping non-numeric inspector id: {}", entry);
            }
            id
        })
        .collect()
}

/// Coerce a parcel area from text or a number
pub fn coerce_area(value: Option<&FormScalar>) -> Option<Number> {
    match value? {
        FormScalar::Number(n) => Some(n.clone()),
        FormScalar::Text(s) => parse_number(s.trim()),
        FormScalar::Bool(_) => None,
    }
}

fn is_digit_only(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Integers stay integers; other finite decimals become floats
fn parse_number(s: &str) -> Option<Number> {
    if s.is_empty() {
        return None;
    }
    if let Ok(n) = s.parse::<u64>() {
        return Some(Number::from(n));
    }
    if let Ok(n) = s.parse::<i64>() {
        return Some(Number::from(n));
    }
    s.parse::<f64>()
        .ok()
        .filter(|f| f.is_finite())
        .and_then(Number::from_f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_inspector_ids() {
        let entries = vec![json!("12"), json!(7), json!("abc"), Value::Null, json!(true)];
        assert_eq!(
            extract_inspector_ids(&entries),
            vec![Number::from(12u64), Number::from(7u64)]
        );
    }

    #[test]
    fn test_inspector_ids_require_digit_only_strings() {
        let entries = vec![json!(" 4"), json!("4a"), json!(""), json!("-3"), json!("2.5")];
        assert!(extract_inspector_ids(&entries).is_empty());
    }

    #[test]
    fn test_inspector_ids_keep_numeric_values() {
        let entries = vec![json!(2.5), json!(-1)];
        assert_eq!(extract_inspector_ids(&entries), vec![
            Number::from_f64(2.5).unwrap(),
            Number::from(-1i64)
        ]);
    }

    #[test]
    fn test_huge_digit_strings_become_floats() {
        let entries = vec![json!("123456789012345678901234567890")];
        let ids = extract_inspector_ids(&entries);
        assert_eq!(ids.len(), 1);
        assert!(ids[0].is_f64());
    }

    #[test]
    fn test_coerce_area() {
        assert_eq!(coerce_area(Some(&"250".into())), Some(Number::from(250u64)));
        assert_eq!(
            coerce_area(Some(&" 12.5 ".into())),
            Number::from_f64(12.5)
        );
        assert_eq!(
            coerce_area(Some(&FormScalar::from(40i64))),
            Some(Number::from(40i64))
        );
        assert_eq!(coerce_area(None), None);
        assert_eq!(coerce_area(Some(&"".into())), None);
        assert_eq!(coerce_area(Some(&"ancho".into())), None);
        assert_eq!(coerce_area(Some(&FormScalar::Bool(true))), None);
    }

    #[test]
    fn test_non_finite_text_is_rejected() {
        assert_eq!(coerce_area(Some(&"inf".into())), None);
        assert_eq!(coerce_area(Some(&"NaN".into())), None);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: every digit-only string that fits in u64 becomes that integer
        #[test]
        fn digit_strings_become_integers(n in any::<u64>()) {
            let ids = extract_inspector_ids(&[Value::String(n.to_string())]);
            prop_assert_eq!(ids, vec![Number::from(n)]);
        }

        /// Property: extraction never yields more ids than entries
        #[test]
        fn never_invents_ids(entries in prop::collection::vec("[0-9a-z ]{0,4}", 0..8)) {
            let values: Vec<Value> = entries.into_iter().map(Value::String).collect();
            prop_assert!(extract_inspector_ids(&values).len() <= values.len());
        }
    }
}
