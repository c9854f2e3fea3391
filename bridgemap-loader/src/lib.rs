//! bridgemap-loader library
//!
//! Loads an ingest-produced GeoJSON file into the SQLite database: derives
//! the distinct highway-district, route and county dimension rows, inserts
//! the normalized tables, and stores the full serialized collection in
//! `state.bridges_geojson` for fast read-back by the API server.

use std::collections::BTreeMap;

use sqlx::SqlitePool;
use tracing::{debug, info};

use bridgemap_common::db::{self, BridgeRow, StateRow};
use bridgemap_common::geojson::FeatureCollection;
use bridgemap_common::states::StateInfo;
use bridgemap_common::{Error, Result};

/// Fallback for dimension references absent from the source data.
const MISSING: &str = "missing";

/// Summary of one load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadSummary {
    pub bridges: usize,
    pub highway_districts: usize,
    pub routes: usize,
    pub counties: usize,
}

/// A derived county dimension row.
#[derive(Debug, Clone)]
struct CountyDim {
    name: String,
}

/// Rebuild the schema from scratch. Each load is a full rebuild;
/// incremental multi-state loads would layer on top of this.
pub async fn rebuild_schema(pool: &SqlitePool) -> Result<()> {
    db::drop_schema(pool).await?;
    db::create_schema(pool).await?;
    Ok(())
}

/// Load one state's GeoJSON text into the database.
///
/// `geojson_text` is stored verbatim in `state.bridges_geojson`; the parsed
/// features feed the normalized tables. Everything runs in one transaction
/// so a failed load leaves no partial state behind.
pub async fn load_state(
    pool: &SqlitePool,
    state: &StateInfo,
    geojson_text: &str,
) -> Result<LoadSummary> {
    let collection: FeatureCollection = serde_json::from_str(geojson_text)?;

    // Derive the distinct dimension values, first occurrence wins. Absent
    // values map to the shared "missing" row so that, with foreign keys
    // enabled, every bridge reference resolves.
    let mut districts: BTreeMap<String, ()> = BTreeMap::new();
    let mut routes: BTreeMap<String, ()> = BTreeMap::new();
    let mut counties: BTreeMap<String, CountyDim> = BTreeMap::new();

    for feature in &collection.features {
        let props = &feature.properties;
        districts
            .entry(or_missing(&props.highway_district002))
            .or_insert(());
        routes.entry(or_missing(&props.route_number)).or_insert(());

        let fips = props
            .county_fips
            .clone()
            .unwrap_or_else(|| MISSING.to_string());
        counties.entry(fips).or_insert_with(|| CountyDim {
            name: props
                .county_name
                .clone()
                .unwrap_or_else(|| MISSING.to_string()),
        });
    }

    let mut tx = pool.begin().await?;

    db::insert_state(
        &mut *tx,
        &StateRow {
            id: state.fips.to_string(),
            abbreviation: state.abbreviation.to_string(),
            name: state.name.to_string(),
            bridges_geojson: Some(geojson_text.to_string()),
        },
    )
    .await?;

    for (id, county) in &counties {
        db::insert_county(&mut *tx, id, state.abbreviation, &county.name, 0).await?;
    }

    for id in districts.keys() {
        db::insert_highway_district(&mut *tx, id, &format!("{} - Hwy District Name Missing", id))
            .await?;
    }

    for id in routes.keys() {
        db::insert_route(&mut *tx, id, &format!("{} - Route Name Missing", id)).await?;
    }

    let mut bridges = 0usize;
    for feature in &collection.features {
        let props = &feature.properties;
        if props.structure_number.is_empty() {
            return Err(Error::InvalidInput(
                "feature without a structure number".to_string(),
            ));
        }

        let row = BridgeRow {
            id: props.structure_number.clone(),
            highway_district_id: or_missing(&props.highway_district002),
            state_abbreviation: state.abbreviation.to_string(),
            route_id: or_missing(&props.route_number),
            county_id: props
                .county_fips
                .clone()
                .unwrap_or_else(|| MISSING.to_string()),
            name: or_placeholder(&props.features_desc006_a, "missing name"),
            description: or_placeholder(&props.features_desc006_a, "missing description"),
            location_details: or_placeholder(&props.location_details, "missing details"),
            lat: props.lat,
            lon: props.lon,
            bridge_geojson: Some(serde_json::to_string_pretty(feature)?),
        };
        db::insert_bridge(&mut *tx, &row).await?;
        bridges += 1;
        debug!("inserted bridge {}", row.id);
    }

    tx.commit().await?;

    let summary = LoadSummary {
        bridges,
        highway_districts: districts.len(),
        routes: routes.len(),
        counties: counties.len(),
    };
    info!(
        "Loaded {}: {} bridges, {} districts, {} routes, {} counties",
        state.abbreviation,
        summary.bridges,
        summary.highway_districts,
        summary.routes,
        summary.counties
    );
    Ok(summary)
}

fn or_missing(value: &str) -> String {
    or_placeholder(value, MISSING)
}

fn or_placeholder(value: &str, placeholder: &str) -> String {
    if value.is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}
