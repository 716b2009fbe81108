// Drives the conversion of an API model into a Swagger 2.0 document.

use serde_json::Value;
use thiserror::Error;
use tracing::info;

use crate::config::ConverterConfig;
use crate::parser::{ApiModel, Endpoint, Method};

use super::definitions::build_definitions;
use super::paths::build_paths;
use super::refs::rewrite_refs;
use super::swagger_doc::assemble_document;
use super::version::stamp_version;

/// Name of this generator, also the stem of the file it writes
pub const GENERATOR_NAME: &str = "swaggerspec-2.0";

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("Missing field: {path}")]
    MissingField { path: String },

    #[error("Invalid value at {path}: expected {expected}")]
    InvalidShape { path: String, expected: &'static str },

    #[error("Conflicting definitions for operation {method} {path}")]
    DuplicateOperation { path: String, method: String },

    #[error("Conflicting definitions for schema {key}")]
    DuplicateSchema { key: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

/// A method together with the endpoint that declares it
#[derive(Debug, Clone, Copy)]
pub struct MethodRef<'a> {
    pub endpoint: &'a Endpoint,
    pub method: &'a Method,
}

/// Flatten the methods of all endpoints, keeping declaration order
pub fn flatten_methods(endpoints: &[Endpoint]) -> Vec<MethodRef<'_>> {
    endpoints
        .iter()
        .flat_map(|endpoint| {
            endpoint
                .methods
                .iter()
                .map(move |method| MethodRef { endpoint, method })
        })
        .collect()
}

/// Converts API models into Swagger 2.0 documents
#[derive(Debug, Clone, Default)]
pub struct SpecConverter {
    config: ConverterConfig,
}

impl SpecConverter {
    pub fn new(config: ConverterConfig) -> Self {
        SpecConverter { config }
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Build the complete document. Either the whole document is returned or
    /// the first error encountered.
    pub fn convert(&self, model: &ApiModel) -> Result<Value> {
        let methods = flatten_methods(&model.endpoints);
        info!(
            endpoints = model.endpoints.len(),
            methods = methods.len(),
            "Converting API model to Swagger 2.0"
        );

        let policy = self.config.conflict_policy;
        let paths = build_paths(&methods, policy)?;
        let definitions = build_definitions(&methods, policy)?;
        let path_count = paths.len();
        let definition_count = definitions.len();

        let mut document = assemble_document(
            &self.config,
            paths,
            definitions,
            &model.regions,
            &model.description,
        );

        // The version covers the document as assembled, before refs are rewritten
        let version = stamp_version(&mut document)?;

        let mut document = Value::Object(document);
        let rewritten = rewrite_refs(&mut document);

        info!(
            paths = path_count,
            definitions = definition_count,
            refs_rewritten = rewritten,
            version = %version,
            "Swagger document generated"
        );

        Ok(document)
    }
}

/// Convert with the default configuration
pub fn to_spec(model: &ApiModel) -> Result<Value> {
    SpecConverter::default().convert(model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_model_string;

    #[test]
    fn test_flatten_keeps_owning_endpoint() {
        let model = parse_model_string(
            r#"{
                "regions": { "service": [] },
                "endpoints": [
                    { "name": "a", "methods": [
                        { "path": "/a/1", "httpMethod": "get" },
                        { "path": "/a/2", "httpMethod": "get" }
                    ] },
                    { "name": "b", "methods": [ { "path": "/b", "httpMethod": "post" } ] }
                ]
            }"#,
        )
        .unwrap();

        let methods = flatten_methods(&model.endpoints);
        let flat: Vec<(&str, &str)> = methods
            .iter()
            .map(|m| (m.endpoint.name.as_str(), m.method.path_url()))
            .collect();
        assert_eq!(flat, vec![("a", "/a/1"), ("a", "/a/2"), ("b", "/b")]);
    }
}
