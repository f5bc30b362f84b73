use anyhow::Result;
use campaign_cleaner::{CleanerConfig, DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Split bank marketing campaign archives into client, campaign and economics tables"
)]
struct Args {
    /// Directory holding the input .zip archives
    #[arg(long, default_value = DEFAULT_INPUT_DIR)]
    input: PathBuf,
    /// Directory the three CSV tables are written to
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    output: PathBuf,
}

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    // ─── 2) configure dirs ───────────────────────────────────────────
    let args = Args::parse();
    let config = CleanerConfig {
        input_dir: args.input,
        output_dir: args.output,
    };
    info!(
        input = %config.input_dir.display(),
        output = %config.output_dir.display(),
        "startup"
    );

    // ─── 3) load → normalize → write ─────────────────────────────────
    let summary = campaign_cleaner::run(&config)?;
    info!(
        archives = summary.archives,
        rows = summary.rows,
        files = summary.written.len(),
        "all done"
    );
    Ok(())
}
