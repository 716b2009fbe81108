// This is the entry point for the CLI application.
// It parses command-line arguments, converts the API model and writes the Swagger document.

use std::process;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use swagger_spec_converter::cli::Args;
use swagger_spec_converter::generator::swagger_doc::render_document;
use swagger_spec_converter::{convert_model, convert_model_file};

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> swagger_spec_converter::Result<()> {
    let config = args.converter_config();

    match &args.output_dir {
        Some(output_dir) => {
            let output_path = convert_model_file(&args.input, output_dir, &config, !args.compact)?;
            eprintln!("Swagger document written to {}", output_path.display());
        }
        None => {
            let document = convert_model(&args.input, &config)?;
            println!("{}", render_document(&document, !args.compact)?);
        }
    }

    Ok(())
}

fn main() {
    // Parse command line arguments
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(err) = run(&args) {
        eprintln!("Error converting API model: {}", err);
        process::exit(1);
    }
}
