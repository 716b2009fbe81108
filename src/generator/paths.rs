// Builds the `paths` object, reshaping OpenAPI 3 operations into Swagger 2.0 ones.

use serde_json::{json, Map, Value};
use tracing::{debug, warn};

use crate::config::ConflictPolicy;

use super::swagger_spec::{GeneratorError, MethodRef, Result};

pub const JSON_MEDIA_TYPE: &str = "application/json";

/// Group operations by path and verb.
///
/// A second method on an already used path and verb replaces the first one
/// under [`ConflictPolicy::Overwrite`] and fails under [`ConflictPolicy::Reject`].
/// Identical repeats are not treated as conflicts.
pub fn build_paths(methods: &[MethodRef<'_>], policy: ConflictPolicy) -> Result<Map<String, Value>> {
    let mut paths = Map::new();

    for entry in methods {
        let path_url = entry.method.path_url();
        let verb = entry.method.http_method();
        let operation = convert_operation(entry.method.operation(), path_url, &verb)?;

        let path_item = paths
            .entry(path_url.to_string())
            .or_insert_with(|| Value::Object(Map::new()))
            .as_object_mut()
            .ok_or_else(|| GeneratorError::InvalidShape {
                path: format!("paths.{}", path_url),
                expected: "a path item object",
            })?;

        let operation = Value::Object(operation);
        if let Some(existing) = path_item.get(&verb) {
            if *existing != operation {
                match policy {
                    ConflictPolicy::Overwrite => warn!(
                        path = path_url,
                        method = %verb,
                        endpoint = %entry.endpoint.name,
                        "Duplicate operation, replacing the earlier definition"
                    ),
                    ConflictPolicy::Reject => {
                        return Err(GeneratorError::DuplicateOperation {
                            path: path_url.to_string(),
                            method: verb,
                        })
                    }
                }
            }
        }

        debug!(path = path_url, method = %verb, "Adding operation");
        path_item.insert(verb, operation);
    }

    Ok(paths)
}

/// Reshape one OpenAPI 3 operation into its Swagger 2.0 form.
///
/// `produces` is always set. Parameter schemas are merged into the parameter
/// and a JSON `requestBody` becomes an `in: body` parameter.
pub fn convert_operation(
    mut operation: Map<String, Value>,
    path_url: &str,
    verb: &str,
) -> Result<Map<String, Value>> {
    let location = format!("paths.{}.{}", path_url, verb);

    operation.insert("produces".into(), json!(JSON_MEDIA_TYPE));

    match operation.get_mut("parameters") {
        None | Some(Value::Null) => {}
        Some(Value::Array(parameters)) => {
            for (index, parameter) in parameters.iter_mut().enumerate() {
                let parameter = parameter.as_object_mut().ok_or_else(|| {
                    GeneratorError::InvalidShape {
                        path: format!("{}.parameters[{}]", location, index),
                        expected: "a parameter object",
                    }
                })?;
                merge_parameter_schema(parameter);
            }
        }
        Some(_) => {
            return Err(GeneratorError::InvalidShape {
                path: format!("{}.parameters", location),
                expected: "a list of parameters",
            })
        }
    }

    // A null request body is left in place, like a null parameter list
    let has_request_body = !matches!(operation.get("requestBody"), None | Some(Value::Null));
    if has_request_body {
        if let Some(request_body) = operation.shift_remove("requestBody") {
            let body = request_body_to_parameter(request_body, &location)?;
            operation.insert("consumes".into(), json!([JSON_MEDIA_TYPE]));

            if let Some(Value::Array(parameters)) = operation.get_mut("parameters") {
                parameters.push(body);
            } else {
                operation.insert("parameters".into(), Value::Array(vec![body]));
            }
        }
    }

    Ok(operation)
}

/// Turn `{content: {"application/json": {schema}}, ...}` into `{..., schema, in: "body"}`.
fn request_body_to_parameter(request_body: Value, location: &str) -> Result<Value> {
    let mut body = match request_body {
        Value::Object(body) => body,
        _ => {
            return Err(GeneratorError::InvalidShape {
                path: format!("{}.requestBody", location),
                expected: "a request body object",
            })
        }
    };

    let schema = body
        .get("content")
        .and_then(|content| content.get(JSON_MEDIA_TYPE))
        .ok_or_else(|| GeneratorError::MissingField {
            path: format!("{}.requestBody.content.{}", location, JSON_MEDIA_TYPE),
        })?
        .get("schema")
        .cloned();

    if let Some(schema) = schema {
        body.insert("schema".into(), schema);
    }
    body.shift_remove("content");
    body.insert("in".into(), json!("body"));

    Ok(Value::Object(body))
}

/// Move the fields of a parameter's nested `schema` onto the parameter itself.
///
/// Schema fields are applied first and the parameter's own fields are kept on
/// top, so `{name, in, description, schema: {type, description}}` keeps the
/// parameter's `description`.
pub fn merge_parameter_schema(parameter: &mut Map<String, Value>) {
    let schema = match parameter.shift_remove("schema") {
        Some(Value::Object(schema)) => schema,
        _ => return,
    };

    for (key, value) in schema {
        if parameter.contains_key(&key) {
            debug!(field = %key, "Parameter field shadows schema field");
            continue;
        }
        parameter.insert(key, value);
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
    fn test_merge_parameter_schema() {
        let mut parameter = object(json!({
            "name": "count",
            "in": "query",
            "schema": { "type": "integer", "format": "int32" }
        }));

        merge_parameter_schema(&mut parameter);

        assert_eq!(
            Value::Object(parameter),
            json!({ "name": "count", "in": "query", "type": "integer", "format": "int32" })
        );
    }

    #[test]
    fn test_merge_keeps_parameter_fields() {
        let mut parameter = object(json!({
            "name": "id",
            "in": "path",
            "description": "Parameter description",
            "schema": { "type": "string", "description": "Schema description" }
        }));

        merge_parameter_schema(&mut parameter);

        assert_eq!(parameter["description"], json!("Parameter description"));
        assert_eq!(parameter["type"], json!("string"));
        assert!(!parameter.contains_key("schema"));
    }

    #[test]
    fn test_operation_without_parameters_only_gains_produces() {
        let operation = convert_operation(Map::new(), "/status", "get").unwrap();
        assert_eq!(Value::Object(operation), json!({ "produces": "application/json" }));
    }

    #[test]
    fn test_request_body_appended_after_existing_parameters() {
        let operation = object(json!({
            "parameters": [ { "name": "id", "in": "path", "schema": { "type": "string" } } ],
            "requestBody": {
                "required": true,
                "content": { "application/json": { "schema": { "$ref": "#/components/schemas/x.Body" } } }
            }
        }));

        let operation = convert_operation(operation, "/x/{id}", "put").unwrap();

        assert!(!operation.contains_key("requestBody"));
        assert_eq!(operation["consumes"], json!(["application/json"]));
        assert_eq!(
            operation["parameters"],
            json!([
                { "name": "id", "in": "path", "type": "string" },
                { "required": true, "schema": { "$ref": "#/components/schemas/x.Body" }, "in": "body" }
            ])
        );
    }

    #[test]
    fn test_request_body_without_json_content_fails() {
        let operation = object(json!({
            "requestBody": { "content": { "text/plain": { "schema": { "type": "string" } } } }
        }));

        match convert_operation(operation, "/x", "post") {
            Err(GeneratorError::MissingField { path }) => {
                assert_eq!(path, "paths./x.post.requestBody.content.application/json")
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_null_request_body_is_left_alone() {
        let operation = object(json!({ "requestBody": null }));

        let operation = convert_operation(operation, "/a", "get").unwrap();

        assert_eq!(
            Value::Object(operation),
            json!({ "requestBody": null, "produces": "application/json" })
        );
    }

    #[test]
    fn test_request_body_must_be_an_object() {
        let operation = object(json!({ "requestBody": "body" }));

        match convert_operation(operation, "/a", "post") {
            Err(GeneratorError::InvalidShape { path, .. }) => {
                assert_eq!(path, "paths./a.post.requestBody")
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_parameters_must_be_a_list() {
        let operation = object(json!({ "parameters": { "name": "id" } }));
        assert!(matches!(
            convert_operation(operation, "/x", "get"),
            Err(GeneratorError::InvalidShape { .. })
        ));
    }
}
