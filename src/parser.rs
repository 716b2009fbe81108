// This module reads the API model that is converted into a Swagger document.

pub mod dto;
pub mod model;

pub use dto::{Dto, DtoKind, EnumDto, ObjectDto, RawSchemaDto, SchemaProducer, UnionDto};
pub use model::{
    parse_model_file,
    parse_model_string,
    ApiModel,
    Endpoint,
    Method,
    Regions,
    ServiceRegion,
    ParserError,
    Result,
};
