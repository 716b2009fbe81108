use clap::Parser;
use std::path::PathBuf;

use crate::config::{ConflictPolicy, ConverterConfig};

#[derive(Debug, Parser)]
#[clap(
    name = "swagger-spec-converter",
    about = "Convert an API model description into a Swagger 2.0 specification",
    version
)]
pub struct Args {
    /// Path to the API model (JSON)
    #[clap(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Directory to write swaggerspec-2.0.json into; prints to stdout when omitted
    #[clap(short, long, value_name = "DIRECTORY")]
    pub output_dir: Option<PathBuf>,

    /// Title of the API
    #[clap(long, value_name = "TITLE")]
    pub title: Option<String>,

    /// Host template of the API
    #[clap(long, value_name = "HOST")]
    pub host: Option<String>,

    /// Fail on conflicting operations or schemas instead of keeping the last one
    #[clap(long)]
    pub strict: bool,

    /// Print the document on a single line
    #[clap(long)]
    pub compact: bool,

    /// Enable debug logging
    #[clap(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Converter settings derived from the flags, defaulting to the Riot API values
    pub fn converter_config(&self) -> ConverterConfig {
        let mut config = ConverterConfig::default();
        if let Some(title) = &self.title {
            config.title = title.clone();
        }
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if self.strict {
            config.conflict_policy = ConflictPolicy::Reject;
        }
        config
    }
}
