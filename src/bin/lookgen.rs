//! CLI for LookGen - renders the fixed lookbook shot list.

use anyhow::Context;
use clap::Parser;
use lookgen::runner::{self, OUTPUT_DIR, PROMPT};
use lookgen::OpenAiImageProvider;
use std::path::Path;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lookgen")]
#[command(about = "Render the lookbook reference shots via the OpenAI Images API")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Pick up OPENAI_API_KEY (and RUST_LOG) from a .env file when present.
    let _ = dotenvy::dotenv();

    init_tracing(cli.debug);

    match render_shot_list().await {
        Ok(report) if report.is_success() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn render_shot_list() -> anyhow::Result<runner::RunReport> {
    let provider = OpenAiImageProvider::builder()
        .build()
        .context("failed to initialize the OpenAI provider")?;

    let out_dir = Path::new(OUTPUT_DIR);
    let outputs = runner::output_specs(out_dir);

    let report = runner::run(&provider, PROMPT, out_dir, &outputs)
        .await
        .context("render run aborted")?;

    Ok(report)
}

fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("lookgen=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lookgen=info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
