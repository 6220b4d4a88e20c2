//! @ai:module:intent CLI comparing classifier architectures on an image folder
//! @ai:module:layer presentation

use anyhow::Result;
use clap::Parser;
use model_compare::{
    config::{CompareConfig, DEFAULT_CONFIG_FILE},
    Analyzer, ComparisonExecutor, ConsoleReporter, JsonReporter, PreflightValidator,
    ScriptRunner, TableImageReporter, PROCESSING_ORDER,
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "model-compare")]
#[command(about = "Compare models with results table")]
#[command(version)]
struct Cli {
    /// Path to image directory
    #[arg(long)]
    dir: Option<PathBuf>,

    /// Dog names file
    #[arg(long)]
    dogfile: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("model_compare=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    let Some(config) = CompareConfig::load_for_run(Path::new(DEFAULT_CONFIG_FILE)) else {
        return Ok(());
    };
    let config = config.with_overrides(cli.dir, cli.dogfile);

    let status = PreflightValidator::validate(&config);
    PreflightValidator::report(&status, &config.paths.image_dir);
    if !status.is_ready() {
        return Ok(());
    }

    run_comparison(&config).await;
    Ok(())
}

/// @ai:intent Run every architecture, then feed the results to each report sink
/// @ai:effects io, fs:write
async fn run_comparison(config: &CompareConfig) {
    println!("Uploaded Image Classification - Model Comparison");
    println!("{}", "=".repeat(50));

    let executor = ComparisonExecutor::new(ScriptRunner::from_config(config));
    let results = executor.execute_all(&PROCESSING_ORDER).await;

    ConsoleReporter::new().print(&results);

    let analysis = Analyzer::analyze(&results);
    print!("{}", analysis.render());

    if let Err(e) = TableImageReporter::new().generate(&results, &config.paths.output_image) {
        tracing::warn!("Skipping visual table: {:#}", e);
    }

    if let Some(ref json_path) = config.paths.json_output {
        let recommended = analysis.recommended().map(|m| m.as_str());
        if let Err(e) = JsonReporter::new().generate(&results, recommended, json_path) {
            tracing::warn!("Failed to write JSON results: {:#}", e);
        }
    }

    println!("\nComparison complete!");
}
