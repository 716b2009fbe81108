// Content-derived version of a document.

use serde_json::{json, Map, Value};
use sha2::{Digest, Sha256};

use super::swagger_spec::{GeneratorError, Result};

/// Top-level keys that do not contribute to the version
pub const VERSION_IGNORED_KEYS: [&str; 2] = ["info", "tags"];

/// Hash every top-level entry except `info` and `tags`.
///
/// Keys are sorted recursively before hashing so the result does not depend
/// on insertion order.
pub fn compute_version(document: &Map<String, Value>) -> Result<String> {
    let versioned: Map<String, Value> = document
        .iter()
        .filter(|(key, _)| !VERSION_IGNORED_KEYS.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    let canonical = serde_json::to_vec(&canonicalize(&Value::Object(versioned)))?;

    let mut hasher = Sha256::new();
    hasher.update(&canonical);
    Ok(format!("{:x}", hasher.finalize()))
}

/// Compute the version and store it as `info.version`
pub fn stamp_version(document: &mut Map<String, Value>) -> Result<String> {
    let version = compute_version(document)?;

    let info = document
        .get_mut("info")
        .and_then(Value::as_object_mut)
        .ok_or_else(|| GeneratorError::MissingField {
            path: "info".to_string(),
        })?;
    info.insert("version".into(), json!(version));

    Ok(version)
}

fn canonicalize(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            Value::Object(
                entries
                    .into_iter()
                    .map(|(key, value)| (key.clone(), canonicalize(value)))
                    .collect(),
            )
        }
        Value::Array(items) => Value::Array(items.iter().map(canonicalize).collect()),
        other => other.clone(),
    }
}
