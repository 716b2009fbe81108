// Rewrites OpenAPI 3 schema references to Swagger 2.0 definition references.

use serde_json::Value;

pub const COMPONENTS_SCHEMAS_PREFIX: &str = "#/components/schemas";
pub const DEFINITIONS_PREFIX: &str = "#/definitions";

/// Rewrite every `$ref` under `value`, returning how many were changed.
pub fn rewrite_refs(value: &mut Value) -> usize {
    match value {
        Value::Object(map) => {
            let mut rewritten = 0;
            for (key, child) in map.iter_mut() {
                if key == "$ref" && rewrite_reference(child) {
                    rewritten += 1;
                }
                rewritten += rewrite_refs(child);
            }
            rewritten
        }
        Value::Array(items) => items.iter_mut().map(rewrite_refs).sum(),
        _ => 0,
    }
}

fn rewrite_reference(reference: &mut Value) -> bool {
    let rewritten = match reference {
        Value::String(target) => match target.strip_prefix(COMPONENTS_SCHEMAS_PREFIX) {
            Some(rest) => format!("{}{}", DEFINITIONS_PREFIX, rest),
            None => return false,
        },
        _ => return false,
    };
    *reference = Value::String(rewritten);
    true
}
