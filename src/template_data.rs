//! Template data normalization.
//!
//! SendGrid dynamic templates take a flat substitution mapping; callers hand
//! us an arbitrary JSON tree. This module flattens the top level: keys are
//! lowercased, nested objects/arrays become compact JSON strings, scalars
//! pass through unchanged.

use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, error};

#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("template data is not a JSON object")]
    NotAnObject,
}

/// Flatten `data` into the mapping sent to the provider.
///
/// Fail-open: absent or null data yields an empty mapping, and so does
/// malformed data (logged at error level). A bad `templateData` must never
/// block the send attempt; the provider rejects missing fields on its own.
pub fn normalize(data: Option<&Value>) -> Map<String, Value> {
    let Some(value) = data else {
        return Map::new();
    };
    if value.is_null() {
        return Map::new();
    }
    match try_normalize(value) {
        Ok(map) => map,
        Err(e) => {
            error!("Failed to process template data: {e}");
            Map::new()
        }
    }
}

/// Strict form of [`normalize`]: the input must be a JSON object.
///
/// If two keys collide after lowercasing, the later one (in the source map's
/// iteration order) silently wins.
pub fn try_normalize(value: &Value) -> Result<Map<String, Value>, NormalizeError> {
    let obj = value.as_object().ok_or(NormalizeError::NotAnObject)?;
    let mut out = Map::new();
    for (key, val) in obj {
        let flat = match val {
            Value::Object(_) | Value::Array(_) => Value::String(val.to_string()),
            scalar => scalar.clone(),
        };
        out.insert(key.to_lowercase(), flat);
    }
    debug!("Template data processed: {} key(s)", out.len());
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn absent_and_null_yield_empty_mapping() {
        assert!(normalize(None).is_empty());
        assert!(normalize(Some(&Value::Null)).is_empty());
    }

    #[test]
    fn flat_scalars_pass_through_with_lowercased_keys() {
        let data = json!({"Name": "Al", "Age": 7, "Active": true, "Note": null});
        let out = normalize(Some(&data));
        assert_eq!(out.get("name"), Some(&json!("Al")));
        assert_eq!(out.get("age"), Some(&json!(7)));
        assert_eq!(out.get("active"), Some(&json!(true)));
        assert_eq!(out.get("note"), Some(&Value::Null));
        assert_eq!(out.len(), 4);
    }

    #[test]
    fn renormalizing_own_output_is_a_no_op() {
        let data = json!({"Name": "Al", "Count": 2});
        let once = normalize(Some(&data));
        let twice = normalize(Some(&Value::Object(once.clone())));
        assert_eq!(once, twice);
    }

    #[test]
    fn nested_values_become_compact_json_strings() {
        let data = json!({"Tags": ["x", "y"], "Meta": {"a": 1, "b": [2]}});
        let out = normalize(Some(&data));
        assert_eq!(out.get("tags"), Some(&json!("[\"x\",\"y\"]")));
        assert_eq!(out.get("meta"), Some(&json!("{\"a\":1,\"b\":[2]}")));
    }

    #[test]
    fn non_object_input_yields_empty_mapping() {
        assert!(normalize(Some(&json!(["a", "b"]))).is_empty());
        assert!(normalize(Some(&json!("scalar"))).is_empty());
        assert!(normalize(Some(&json!(42))).is_empty());
    }

    #[test]
    fn non_object_input_is_an_error_in_strict_form() {
        assert!(matches!(
            try_normalize(&json!([1, 2])),
            Err(NormalizeError::NotAnObject)
        ));
    }

    // Observed behavior, not a contract: after lowercasing, the later key in
    // the source map's iteration order overwrites the earlier one.
    #[test]
    fn lowercase_collision_is_last_write_wins() {
        let data = json!({"Name": "first", "name": "second"});
        let out = normalize(Some(&data));
        assert_eq!(out.len(), 1);
        assert_eq!(out.get("name"), Some(&json!("second")));
    }
}
