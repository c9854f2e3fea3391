//! bridgemap-loader - GeoJSON to SQLite database loader
//!
//! Reads the GeoJSON file produced by bridgemap-ingest, rebuilds the
//! database schema, and populates the dimension tables, the bridge table
//! and the per-state GeoJSON blob the API server reads back.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bridgemap_common::{config, db};

/// Command-line arguments for bridgemap-loader
#[derive(Parser, Debug)]
#[command(name = "bridgemap-loader")]
#[command(about = "Load ingested bridge GeoJSON into the bridgemap database")]
#[command(version)]
struct Args {
    /// State the GeoJSON file covers (postal abbreviation)
    #[arg(short, long, env = "BRIDGEMAP_STATE")]
    state: String,

    /// GeoJSON input path (default: <data-dir>/<state>_bridges.json)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Data folder holding the database and GeoJSON files
    #[arg(short, long, env = "BRIDGEMAP_DATA_DIR")]
    data_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bridgemap_loader=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting bridgemap-loader v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let args = Args::parse();

    let state = bridgemap_common::states::find(&args.state)
        .ok_or_else(|| anyhow::anyhow!("Unknown state abbreviation: {}", args.state))?;

    let data_dir = config::resolve_data_dir(args.data_dir.as_deref());
    config::ensure_data_dir(&data_dir)?;

    let input = args
        .input
        .unwrap_or_else(|| config::geojson_path(&data_dir, state.abbreviation));
    let db_path = config::database_path(&data_dir);

    info!("Input: {}", input.display());
    info!("Database: {}", db_path.display());

    let geojson_text = std::fs::read_to_string(&input)
        .with_context(|| format!("Failed to read {}", input.display()))?;

    let pool = db::init_database(&db_path)
        .await
        .context("Failed to open database")?;

    bridgemap_loader::rebuild_schema(&pool)
        .await
        .context("Failed to rebuild schema")?;

    bridgemap_loader::load_state(&pool, state, &geojson_text)
        .await
        .context("Load failed")?;

    Ok(())
}
