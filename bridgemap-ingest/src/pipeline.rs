//! Ingest pipeline: NBI CSV -> enriched GeoJSON file
//!
//! Reads the delimited file, maps each record through the column
//! configuration, resolves each bridge's county via the FCC Area API, and
//! writes a pretty-printed FeatureCollection. County lookup dominates the
//! runtime (one HTTP round trip per bridge), so progress is logged per row.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, warn};

use bridgemap_common::geojson::{BridgeProperties, Feature, FeatureCollection};

use crate::extract::record_to_properties;
use crate::fcc::FccClient;

/// Placeholder until real census population data is wired in.
const PLACEHOLDER_COUNTY_POPULATION: i64 = 1000;

/// Options for one ingest run.
#[derive(Debug, Clone)]
pub struct IngestOptions {
    /// NBI delimited input file.
    pub input: PathBuf,
    /// GeoJSON output file.
    pub output: PathBuf,
    /// Skip the per-row FCC lookup (offline runs); enrichment fields are
    /// left absent.
    pub skip_county_lookup: bool,
}

/// Summary of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestSummary {
    pub bridges: usize,
    pub skipped_rows: usize,
    pub counties_resolved: usize,
}

/// Parse the input file into bridge properties. Rows that fail extraction
/// (usually unparseable coordinates) are skipped with a warning.
pub fn read_bridges(input: &Path) -> Result<(Vec<BridgeProperties>, usize)> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(input)
        .with_context(|| format!("Failed to open {}", input.display()))?;

    let mut bridges = Vec::new();
    let mut skipped = 0usize;

    for (row, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("CSV parse error at row {}", row + 2))?;
        match record_to_properties(&record) {
            Ok(props) => bridges.push(props),
            Err(e) => {
                // Row numbers are 1-based file lines; +2 skips the header
                warn!("Skipping row {}: {}", row + 2, e);
                skipped += 1;
            }
        }
    }

    Ok((bridges, skipped))
}

/// Resolve each bridge's county. Failed lookups leave the enrichment fields
/// unset rather than aborting a multi-minute run.
pub async fn add_counties(client: &FccClient, bridges: &mut [BridgeProperties]) -> usize {
    let total = bridges.len();
    let mut resolved = 0usize;

    for (i, bridge) in bridges.iter_mut().enumerate() {
        info!("row {} / {}", i + 1, total);
        match client.lookup_county(bridge.lat, bridge.lon).await {
            Ok(county) => {
                bridge.county_name = Some(county.name);
                bridge.county_fips = Some(county.fips);
                bridge.county_population = Some(PLACEHOLDER_COUNTY_POPULATION);
                resolved += 1;
            }
            Err(e) => {
                warn!(
                    "County lookup failed for structure {}: {}",
                    bridge.structure_number, e
                );
            }
        }
    }

    resolved
}

/// Run the full pipeline and write the output file.
pub async fn run(options: &IngestOptions) -> Result<IngestSummary> {
    info!("Reading {}", options.input.display());
    let (mut bridges, skipped_rows) = read_bridges(&options.input)?;
    info!("Parsed {} bridges ({} rows skipped)", bridges.len(), skipped_rows);

    let counties_resolved = if options.skip_county_lookup {
        info!("County lookup skipped");
        0
    } else {
        let client = FccClient::new().context("Failed to build FCC client")?;
        add_counties(&client, &mut bridges).await
    };

    let features: Vec<Feature> = bridges.into_iter().map(Feature::from_properties).collect();
    let bridge_count = features.len();
    let collection = FeatureCollection::new(features);

    if let Some(parent) = options.output.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(&collection)?;
    std::fs::write(&options.output, json)
        .with_context(|| format!("Failed to write {}", options.output.display()))?;
    info!("Wrote {}", options.output.display());

    Ok(IngestSummary {
        bridges: bridge_count,
        skipped_rows,
        counties_resolved,
    })
}
