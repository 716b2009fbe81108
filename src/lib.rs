pub mod cli;
pub mod config;
pub mod parser;
pub mod generator;
pub mod utils;

// Re-export frequently used items for easier access
pub use config::{ConflictPolicy, ConverterConfig};
pub use parser::{parse_model_file, ApiModel, Dto, Endpoint, Method, SchemaProducer};
pub use generator::{to_spec, GeneratorError, SpecConverter, GENERATOR_NAME};

use serde_json::Value;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Parser error: {0}")]
    ParserError(#[from] parser::ParserError),

    #[error("Generator error: {0}")]
    GeneratorError(#[from] generator::GeneratorError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;

/// Load an API model file and convert it into a Swagger 2.0 document.
pub fn convert_model<P: AsRef<Path>>(input_file: P, config: &ConverterConfig) -> Result<Value> {
    // Load the API model
    let model = parser::parse_model_file(input_file)?;

    // Run the conversion pipeline
    let document = SpecConverter::new(config.clone()).convert(&model)?;
    Ok(document)
}

/// Convert an API model file into a Swagger 2.0 document written to `output_dir`.
///
/// Returns the path of the written file, `<output_dir>/swaggerspec-2.0.json`.
/// The JSON is pretty-printed when `pretty` is set.
pub fn convert_model_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input_file: P,
    output_dir: Q,
    config: &ConverterConfig,
    pretty: bool,
) -> Result<PathBuf> {
    let document = convert_model(input_file, config)?;

    let output_path = output_dir
        .as_ref()
        .join(format!("{}.json", GENERATOR_NAME));
    generator::write_document(&document, &output_path, pretty)?;

    Ok(output_path)
}
