//! bridgemap-ingest - NBI CSV to GeoJSON converter
//!
//! Reads a state's NBI delimited file (e.g. the PA22 file from
//! https://www.fhwa.dot.gov/bridge/nbi/), converts the packed DMS
//! coordinates to decimal degrees, resolves each bridge's county through
//! the FCC Area API, and writes a GeoJSON FeatureCollection into the data
//! folder. Run bridgemap-loader afterwards to populate the database.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bridgemap_common::config;
use bridgemap_ingest::pipeline::{self, IngestOptions};

/// Command-line arguments for bridgemap-ingest
#[derive(Parser, Debug)]
#[command(name = "bridgemap-ingest")]
#[command(about = "Convert an NBI delimited file to enriched GeoJSON")]
#[command(version)]
struct Args {
    /// NBI delimited input file
    input: PathBuf,

    /// State the input file covers (postal abbreviation)
    #[arg(short, long, env = "BRIDGEMAP_STATE")]
    state: String,

    /// Output GeoJSON path (default: <data-dir>/<state>_bridges.json)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Data folder for default output placement
    #[arg(short, long, env = "BRIDGEMAP_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Skip the FCC county lookup (offline run)
    #[arg(long)]
    skip_county_lookup: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bridgemap_ingest=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting bridgemap-ingest v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let args = Args::parse();

    let state = bridgemap_common::states::find(&args.state)
        .ok_or_else(|| anyhow::anyhow!("Unknown state abbreviation: {}", args.state))?;

    let output = match args.output {
        Some(path) => path,
        None => {
            let data_dir = config::resolve_data_dir(args.data_dir.as_deref());
            config::ensure_data_dir(&data_dir)?;
            config::geojson_path(&data_dir, state.abbreviation)
        }
    };

    info!("State: {} ({})", state.name, state.abbreviation);

    let options = IngestOptions {
        input: args.input,
        output,
        skip_county_lookup: args.skip_county_lookup,
    };
    let summary = pipeline::run(&options).await?;

    info!(
        "Done: {} bridges, {} rows skipped, {} counties resolved",
        summary.bridges, summary.skipped_rows, summary.counties_resolved
    );

    Ok(())
}
