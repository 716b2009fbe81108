// Data transfer object kinds and the schemas they produce.

use serde::Deserialize;
use serde_json::{json, Map, Value};

/// Anything that can describe itself as a JSON Schema object
pub trait SchemaProducer {
    /// Build a fresh schema; callers may mutate the returned map.
    fn to_schema(&self) -> Map<String, Value>;
}

/// A named DTO declared by a method
#[derive(Debug, Clone, Deserialize)]
pub struct Dto {
    pub name: String,

    #[serde(flatten)]
    pub kind: DtoKind,
}

impl Dto {
    pub fn new(name: impl Into<String>, kind: DtoKind) -> Self {
        Dto {
            name: name.into(),
            kind,
        }
    }
}

impl SchemaProducer for Dto {
    fn to_schema(&self) -> Map<String, Value> {
        self.kind.to_schema()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DtoKind {
    Object(ObjectDto),
    Enum(EnumDto),
    Union(UnionDto),
    Schema(RawSchemaDto),
}

impl SchemaProducer for DtoKind {
    fn to_schema(&self) -> Map<String, Value> {
        match self {
            DtoKind::Object(dto) => dto.to_schema(),
            DtoKind::Enum(dto) => dto.to_schema(),
            DtoKind::Union(dto) => dto.to_schema(),
            DtoKind::Schema(dto) => dto.to_schema(),
        }
    }
}

/// A structured object with named properties
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ObjectDto {
    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub properties: Map<String, Value>,

    #[serde(default)]
    pub required: Vec<String>,
}

impl SchemaProducer for ObjectDto {
    fn to_schema(&self) -> Map<String, Value> {
        let mut schema = Map::new();
        schema.insert("type".into(), json!("object"));
        insert_description(&mut schema, &self.description);
        schema.insert("properties".into(), Value::Object(self.properties.clone()));
        if !self.required.is_empty() {
            schema.insert("required".into(), json!(self.required));
        }
        schema
    }
}

/// A scalar restricted to a fixed set of values
#[derive(Debug, Clone, Deserialize)]
pub struct EnumDto {
    #[serde(default)]
    pub description: Option<String>,

    /// Scalar type of the values (string, integer, ...)
    #[serde(rename = "type")]
    pub value_type: String,

    pub values: Vec<Value>,
}

impl SchemaProducer for EnumDto {
    fn to_schema(&self) -> Map<String, Value> {
        let mut schema = Map::new();
        schema.insert("type".into(), json!(self.value_type));
        insert_description(&mut schema, &self.description);
        schema.insert("enum".into(), Value::Array(self.values.clone()));
        schema
    }
}

/// A value matching any one of several schemas. Produces `anyOf` without a `type`.
#[derive(Debug, Clone, Deserialize)]
pub struct UnionDto {
    #[serde(default)]
    pub description: Option<String>,

    pub alternatives: Vec<Value>,
}

impl SchemaProducer for UnionDto {
    fn to_schema(&self) -> Map<String, Value> {
        let mut schema = Map::new();
        insert_description(&mut schema, &self.description);
        schema.insert("anyOf".into(), Value::Array(self.alternatives.clone()));
        schema
    }
}

/// A JSON Schema passed through verbatim
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSchemaDto {
    pub schema: Map<String, Value>,
}

impl SchemaProducer for RawSchemaDto {
    fn to_schema(&self) -> Map<String, Value> {
        self.schema.clone()
    }
}

fn insert_description(schema: &mut Map<String, Value>, description: &Option<String>) {
    if let Some(description) = description {
        schema.insert("description".into(), json!(description));
    }
}
