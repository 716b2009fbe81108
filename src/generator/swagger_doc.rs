// Assembles the top-level Swagger 2.0 document and writes it out.

use serde_json::{json, Map, Value};
use std::path::Path;

use crate::config::ConverterConfig;
use crate::parser::Regions;
use crate::utils::write_to_file;

use super::swagger_spec::Result;

pub const SWAGGER_VERSION: &str = "2.0";

/// Vendor extension listing the values of `{platform}` in `host`
pub const HOST_PLATFORM_EXTENSION: &str = "x-host-platform";

pub const QUERY_KEY_SCHEME: &str = "api_key";
pub const HEADER_KEY_SCHEME: &str = "X-Riot-Token";

/// Assemble the top-level document around the generated paths and definitions.
/// `info.version` is left for the version stamper.
pub fn assemble_document(
    config: &ConverterConfig,
    paths: Map<String, Value>,
    definitions: Map<String, Value>,
    regions: &Regions,
    description: &str,
) -> Map<String, Value> {
    let host_platforms: Vec<Value> = regions
        .service
        .iter()
        .map(|region| json!(region.host_platform))
        .collect();

    let mut document = Map::new();
    document.insert("swagger".into(), json!(SWAGGER_VERSION));
    document.insert(
        "info".into(),
        json!({
            "title": config.title,
            "description": description,
            "termsOfService": config.terms_of_service
        }),
    );
    document.insert("host".into(), json!(config.host));
    document.insert(HOST_PLATFORM_EXTENSION.into(), Value::Array(host_platforms));
    document.insert("schemes".into(), json!(["https"]));
    document.insert("paths".into(), Value::Object(paths));
    document.insert("definitions".into(), Value::Object(definitions));
    document.insert("securityDefinitions".into(), security_definitions());
    // Either scheme satisfies the requirement
    document.insert(
        "security".into(),
        json!([
            { QUERY_KEY_SCHEME: [] },
            { HEADER_KEY_SCHEME: [] }
        ]),
    );

    document
}

fn security_definitions() -> Value {
    let mut definitions = Map::new();
    definitions.insert(
        QUERY_KEY_SCHEME.into(),
        json!({
            "type": "apiKey",
            "description": "API key in query param.",
            "name": QUERY_KEY_SCHEME,
            "in": "query"
        }),
    );
    definitions.insert(
        HEADER_KEY_SCHEME.into(),
        json!({
            "type": "apiKey",
            "description": "API key in header.",
            "name": HEADER_KEY_SCHEME,
            "in": "header"
        }),
    );
    Value::Object(definitions)
}

/// Write a document as JSON, pretty-printed unless `pretty` is false
pub fn write_document(document: &Value, output_path: &Path, pretty: bool) -> Result<()> {
    let json_str = render_document(document, pretty)?;
    write_to_file(output_path, json_str)?;
    Ok(())
}

pub fn render_document(document: &Value, pretty: bool) -> Result<String> {
    let json_str = if pretty {
        serde_json::to_string_pretty(document)?
    } else {
        serde_json::to_string(document)?
    };
    Ok(json_str)
}
