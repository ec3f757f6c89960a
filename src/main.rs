//! Modgraph CLI entry point

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

const USAGE: &str = "Usage: modgraph [OPTIONS] <OUTPUT_FILE> <BASE_FOLDER>";

#[derive(Parser)]
#[command(name = "modgraph")]
#[command(about = "Maven module relation graph generator", long_about = None)]
#[command(override_usage = "modgraph [OPTIONS] <OUTPUT_FILE> <BASE_FOLDER>")]
struct Cli {
    /// Output JSON file followed by the folder to scan
    #[arg(value_name = "PATH")]
    paths: Vec<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Descriptor file name to look for
    #[arg(long, value_name = "NAME", default_value = modgraph_indexer::POM_XML)]
    descriptor: String,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let [output, base] = match <[PathBuf; 2]>::try_from(cli.paths) {
        Ok(paths) => paths,
        Err(_) => {
            println!("Please provide both arguments");
            println!("{}", USAGE);
            return Ok(ExitCode::from(2));
        }
    };

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "modgraph={0},modgraph_core={0},modgraph_indexer={0}",
            log_level
        )))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Modgraph v{}", env!("CARGO_PKG_VERSION"));

    let options = commands::PipelineOptions {
        descriptor_name: cli.descriptor,
    };
    commands::generate(&output, &base, &options)?;

    Ok(ExitCode::SUCCESS)
}
