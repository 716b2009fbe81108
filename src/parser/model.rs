// src/parser/model.rs

use serde::Deserialize;
use serde_json::{Error as JsonError, Map, Value};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

use super::dto::Dto;

#[derive(Debug, Error)]
pub enum ParserError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] JsonError),

    #[error("Invalid API model: {0}")]
    InvalidModel(String),
}

pub type Result<T> = std::result::Result<T, ParserError>;

/// The complete description of an API, as consumed by the converter
#[derive(Debug, Clone, Deserialize)]
pub struct ApiModel {
    /// All endpoints (groups of methods) of the API
    pub endpoints: Vec<Endpoint>,

    /// Regions the API is served from
    pub regions: Regions,

    /// Free-text description copied into `info.description`
    #[serde(default)]
    pub description: String,
}

/// A named group of methods, e.g. `summoner-v4`
#[derive(Debug, Clone, Deserialize)]
pub struct Endpoint {
    /// Endpoint name, used as the prefix of definition keys
    pub name: String,

    /// Methods in declaration order
    #[serde(default)]
    pub methods: Vec<Method>,
}

/// A single HTTP method on a path
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Method {
    /// The path template (e.g., "/lol/summoner/v4/summoners/{encryptedSummonerId}")
    pub path: String,

    /// HTTP verb (get, post, put, delete, ...)
    pub http_method: String,

    /// OpenAPI 3 style operation object (parameters, requestBody, responses, ...)
    #[serde(default)]
    pub operation: Map<String, Value>,

    /// Data transfer objects declared by this method
    #[serde(default)]
    pub dtos: Vec<Dto>,
}

impl Method {
    pub fn path_url(&self) -> &str {
        &self.path
    }

    /// Lowercase HTTP verb, the key used under the path item
    pub fn http_method(&self) -> String {
        self.http_method.to_ascii_lowercase()
    }

    /// A fresh copy of the operation that the converter is free to reshape
    pub fn operation(&self) -> Map<String, Value> {
        self.operation.clone()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Regions {
    /// Service regions in declaration order
    #[serde(default)]
    pub service: Vec<ServiceRegion>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRegion {
    /// Host platform id substituted into `{platform}` of the host, e.g. "na1"
    pub host_platform: String,
}

/// Parse an API model from a JSON file
pub fn parse_model_file<P: AsRef<Path>>(path: P) -> Result<ApiModel> {
    let mut file = File::open(path)?;
    let mut content = String::new();
    file.read_to_string(&mut content)?;

    parse_model_string(&content)
}

/// Parse an API model from a JSON string
pub fn parse_model_string(content: &str) -> Result<ApiModel> {
    let model: ApiModel = serde_json::from_str(content)?;

    for endpoint in &model.endpoints {
        if endpoint.name.is_empty() {
            return Err(ParserError::InvalidModel("Endpoint without a name".into()));
        }
        for method in &endpoint.methods {
            if method.path.is_empty() || method.http_method.is_empty() {
                return Err(ParserError::InvalidModel(format!(
                    "Method of endpoint '{}' is missing its path or HTTP method",
                    endpoint.name
                )));
            }
        }
    }

    Ok(model)
}
