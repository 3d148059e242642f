//! Removal of empty leaf fields before a value goes over the wire.
//!
//! The CallManager rejects messages containing empty tags, while nested
//! structures may be sparse. Pruning never mutates its input.

use serde_json::{Map, Value};

/// Whether a scalar counts as unset: `null` or the empty string.
pub fn is_empty_scalar(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Returns a copy of `value` without empty leaf fields.
///
/// - empty scalar fields are dropped
/// - nested objects are pruned recursively and dropped once nothing is left
/// - sequences keep every element; elements are pruned like any other value
pub fn prune(value: &Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(prune_map(map)),
        Value::Array(items) => Value::Array(items.iter().map(prune).collect()),
        other => other.clone(),
    }
}

/// Prunes the fields of one object.
pub fn prune_map(map: &Map<String, Value>) -> Map<String, Value> {
    let mut out = Map::new();
    for (key, value) in map {
        match value {
            Value::Object(inner) => {
                let inner = prune_map(inner);
                if !inner.is_empty() {
                    out.insert(key.clone(), Value::Object(inner));
                }
            }
            Value::Array(items) => {
                out.insert(
                    key.clone(),
                    Value::Array(items.iter().map(prune).collect()),
                );
            }
            v if is_empty_scalar(v) => {}
            v => {
                out.insert(key.clone(), v.clone());
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn drops_empty_scalars_keeps_falsy_values() {
        let out = prune(&json!({"a": "", "b": null, "c": false, "d": 0, "e": "x"}));
        assert_eq!(out, json!({"c": false, "d": 0, "e": "x"}));
    }

    #[test]
    fn drops_nested_object_once_empty() {
        let out = prune(&json!({"devicePool": {"_uuid": "", "value": ""}, "name": "x"}));
        assert_eq!(out, json!({"name": "x"}));
    }

    #[test]
    fn keeps_sparse_nested_object() {
        let out = prune(&json!({"devicePool": {"_uuid": "", "value": "Default"}}));
        assert_eq!(out, json!({"devicePool": {"value": "Default"}}));
    }

    #[test]
    fn sequences_keep_every_element() {
        let out = prune(&json!({"lines": [{"index": 1, "label": ""}, {"label": ""}, ""]}));
        assert_eq!(out, json!({"lines": [{"index": 1}, {}, ""]}));
    }

    #[test]
    fn empty_sequence_is_kept() {
        assert_eq!(prune(&json!({"lines": []})), json!({"lines": []}));
    }

    #[test]
    fn input_is_not_mutated() {
        let input = json!({"a": "", "b": {"c": ""}});
        let _ = prune(&input);
        assert_eq!(input, json!({"a": "", "b": {"c": ""}}));
    }

    #[test]
    fn scalar_input_passes_through() {
        assert_eq!(prune(&json!("")), json!(""));
    }
}
