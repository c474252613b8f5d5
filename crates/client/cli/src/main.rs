//! Headless pickup simulation entry point.
//!
//! Loads a data directory, spawns the pickups of one level, replays the
//! level's scripted overlaps frame by frame and prints a JSON report.
mod config;
mod simulation;

use anyhow::Result;
use config::SimConfig;
use simulation::Simulation;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    setup_logging();

    let config = SimConfig::from_env();
    tracing::info!(
        "Running level '{}' from {} ({:?} frames, realtime: {})",
        config.level,
        config.data_dir.display(),
        config.frame,
        config.realtime
    );

    let report = Simulation::load(&config)?.run(&config).await?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// Logs go to stderr so stdout carries only the report.
fn setup_logging() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .init();
}
