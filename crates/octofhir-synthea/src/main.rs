use anyhow::Result;
use clap::Parser;

use octofhir_synthea::cli::Cli;
use octofhir_synthea::observability::init_tracing;
use octofhir_synthea::output::{print_error, print_summary};
use octofhir_synthea::upload::Uploader;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        print_error(&format!("{e:#}"));
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let uploader = Uploader::new(cli.target());
    tracing::debug!(root = %cli.path.display(), url = uploader.target().url(), "Starting upload");

    let outcomes = uploader.upload(&cli.path).await?;
    if !outcomes.is_empty() {
        print_summary(&mut std::io::stdout(), &outcomes)?;
    }
    Ok(())
}
