//! Insert and read-back queries
//!
//! Inserts take a sqlx executor so the loader can run them inside one
//! transaction; reads take the pool directly.

use crate::Result;
use sqlx::{Sqlite, SqlitePool};

/// Row inserted into the `state` table.
#[derive(Debug, Clone)]
pub struct StateRow {
    pub id: String,
    pub abbreviation: String,
    pub name: String,
    pub bridges_geojson: Option<String>,
}

/// Row inserted into the `bridge` table.
#[derive(Debug, Clone)]
pub struct BridgeRow {
    pub id: String,
    pub highway_district_id: String,
    pub state_abbreviation: String,
    pub route_id: String,
    pub county_id: String,
    pub name: String,
    pub description: String,
    pub location_details: String,
    pub lat: f64,
    pub lon: f64,
    pub bridge_geojson: Option<String>,
}

pub async fn insert_state<'e, E>(executor: E, row: &StateRow) -> Result<()>
where
    E: sqlx::Executor<'e, Database = Sqlite>,
{
    sqlx::query("INSERT INTO state (id, abbreviation, name, bridges_geojson) VALUES (?, ?, ?, ?)")
        .bind(&row.id)
        .bind(&row.abbreviation)
        .bind(&row.name)
        .bind(&row.bridges_geojson)
        .execute(executor)
        .await?;
    Ok(())
}

pub async fn insert_highway_district<'e, E>(executor: E, id: &str, name: &str) -> Result<()>
where
    E: sqlx::Executor<'e, Database = Sqlite>,
{
    sqlx::query("INSERT INTO highway_district (id, name) VALUES (?, ?)")
        .bind(id)
        .bind(name)
        .execute(executor)
        .await?;
    Ok(())
}

pub async fn insert_route<'e, E>(executor: E, id: &str, name: &str) -> Result<()>
where
    E: sqlx::Executor<'e, Database = Sqlite>,
{
    sqlx::query("INSERT INTO route (id, name) VALUES (?, ?)")
        .bind(id)
        .bind(name)
        .execute(executor)
        .await?;
    Ok(())
}

pub async fn insert_county<'e, E>(
    executor: E,
    id: &str,
    state_abbreviation: &str,
    name: &str,
    population: i64,
) -> Result<()>
where
    E: sqlx::Executor<'e, Database = Sqlite>,
{
    sqlx::query("INSERT INTO county (id, state_abbreviation, name, population) VALUES (?, ?, ?, ?)")
        .bind(id)
        .bind(state_abbreviation)
        .bind(name)
        .bind(population)
        .execute(executor)
        .await?;
    Ok(())
}

pub async fn insert_bridge<'e, E>(executor: E, row: &BridgeRow) -> Result<()>
where
    E: sqlx::Executor<'e, Database = Sqlite>,
{
    sqlx::query(
        "INSERT INTO bridge (id, highway_district_id, state_abbreviation, route_id, county_id, \
         name, description, location_details, lat, lon, bridge_geojson) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&row.id)
    .bind(&row.highway_district_id)
    .bind(&row.state_abbreviation)
    .bind(&row.route_id)
    .bind(&row.county_id)
    .bind(&row.name)
    .bind(&row.description)
    .bind(&row.location_details)
    .bind(row.lat)
    .bind(row.lon)
    .bind(&row.bridge_geojson)
    .execute(executor)
    .await?;
    Ok(())
}

/// Fetch the precomputed GeoJSON blob for a state, if that state has been
/// loaded.
pub async fn fetch_state_geojson(
    pool: &SqlitePool,
    abbreviation: &str,
) -> Result<Option<String>> {
    let row: Option<(Option<String>,)> =
        sqlx::query_as("SELECT bridges_geojson FROM state WHERE abbreviation = ?")
            .bind(abbreviation)
            .fetch_optional(pool)
            .await?;

    Ok(row.and_then(|(blob,)| blob))
}

/// Count rows in a table. Loader uses this for its end-of-run summary.
pub async fn count_rows(pool: &SqlitePool, table: &str) -> Result<i64> {
    // Table names come from our own schema constants, never user input
    let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(pool)
        .await?;
    Ok(count.0)
}
