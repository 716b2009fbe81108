// Collects DTO schemas into the `definitions` object.

use serde_json::{json, Map, Value};
use tracing::{debug, warn};

use crate::config::ConflictPolicy;
use crate::parser::SchemaProducer;

use super::swagger_spec::{GeneratorError, MethodRef, Result};

/// Key of the built-in error schema
pub const ERROR_SCHEMA_KEY: &str = "Error";

/// Schema of the error body every endpoint may return
pub fn error_schema() -> Value {
    json!({
        "properties": {
            "status": {
                "type": "object",
                "properties": {
                    "status_code": {
                        "type": "integer"
                    },
                    "message": {
                        "type": "string"
                    }
                }
            }
        }
    })
}

/// Definition key of a DTO, e.g. `summoner-v4.SummonerDTO`
pub fn definition_key(endpoint_name: &str, dto_name: &str) -> String {
    format!("{}.{}", endpoint_name, dto_name)
}

/// Collect the schema of every DTO of every method, plus the `Error` schema.
///
/// The same DTO is usually declared by several methods of an endpoint, so a
/// repeated key only counts as a conflict when the schemas differ.
pub fn build_definitions(
    methods: &[MethodRef<'_>],
    policy: ConflictPolicy,
) -> Result<Map<String, Value>> {
    let mut definitions = Map::new();
    definitions.insert(ERROR_SCHEMA_KEY.into(), error_schema());

    for entry in methods {
        for dto in &entry.method.dtos {
            let key = definition_key(&entry.endpoint.name, &dto.name);
            let mut schema = dto.to_schema();
            downgrade_any_of(&mut schema);
            let schema = Value::Object(schema);

            if let Some(existing) = definitions.get(&key) {
                if *existing != schema {
                    match policy {
                        ConflictPolicy::Overwrite => {
                            warn!(key = %key, "Duplicate schema, replacing the earlier definition")
                        }
                        ConflictPolicy::Reject => return Err(GeneratorError::DuplicateSchema { key }),
                    }
                }
            }

            debug!(key = %key, "Adding schema definition");
            definitions.insert(key, schema);
        }
    }

    Ok(definitions)
}

/// Swagger 2.0 has no `anyOf`. A schema with alternatives but no `type` becomes a plain string.
pub fn downgrade_any_of(schema: &mut Map<String, Value>) {
    let has_type = !matches!(schema.get("type"), None | Some(Value::Null));
    let has_any_of = !matches!(schema.get("anyOf"), None | Some(Value::Null));

    if !has_type && has_any_of {
        schema.shift_remove("anyOf");
        schema.insert("type".into(), json!("string"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected an object"),
        }
    }

    #[test]
    fn test_downgrade_any_of_without_type() {
        let mut schema = object(json!({ "anyOf": [ { "type": "integer" }, { "type": "string" } ] }));
        downgrade_any_of(&mut schema);
        assert_eq!(Value::Object(schema), json!({ "type": "string" }));
    }

    #[test]
    fn test_keep_any_of_when_typed() {
        let mut schema = object(json!({ "type": "object", "anyOf": [ { "required": ["a"] } ] }));
        downgrade_any_of(&mut schema);
        assert!(schema.contains_key("anyOf"));
        assert_eq!(schema["type"], json!("object"));
    }

    #[test]
    fn test_definition_key() {
        assert_eq!(definition_key("match-v5", "MatchDto"), "match-v5.MatchDto");
    }
}
