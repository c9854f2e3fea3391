//! Schema definition
//!
//! Normalized dimensions (highway_district, state, route, county) plus the
//! bridge fact table. `state.bridges_geojson` additionally holds the full
//! serialized FeatureCollection for the state, which is what the API server
//! reads back; the normalized rows exist for ad-hoc queries and future
//! dimension tabs in the UI.

use crate::Result;
use sqlx::SqlitePool;
use tracing::info;

const CREATE_HIGHWAY_DISTRICT_TABLE: &str = "
CREATE TABLE highway_district (
  id TEXT PRIMARY KEY,
  name TEXT NOT NULL
)
";

const CREATE_STATE_TABLE: &str = "
CREATE TABLE state (
  id TEXT NOT NULL,
  abbreviation TEXT PRIMARY KEY,
  name TEXT NOT NULL,
  bridges_geojson TEXT
)
";

const CREATE_ROUTE_TABLE: &str = "
CREATE TABLE route (
  id TEXT PRIMARY KEY,
  name TEXT NOT NULL DEFAULT 'Missing Name'
)
";

const CREATE_COUNTY_TABLE: &str = "
CREATE TABLE county (
  id TEXT PRIMARY KEY,
  state_abbreviation TEXT NOT NULL,
  name TEXT NOT NULL,
  population NUMERIC NULL,

  FOREIGN KEY (state_abbreviation) REFERENCES state (abbreviation)
)
";

const CREATE_BRIDGE_TABLE: &str = "
CREATE TABLE bridge (
  id TEXT PRIMARY KEY,
  highway_district_id TEXT NOT NULL,
  state_abbreviation TEXT NOT NULL,
  route_id TEXT NOT NULL,
  county_id TEXT NOT NULL,

  name TEXT NOT NULL,
  description TEXT NOT NULL,
  location_details TEXT NOT NULL,
  lat NUMERIC NOT NULL,
  lon NUMERIC NOT NULL,
  bridge_geojson TEXT NULL,

  FOREIGN KEY (highway_district_id) REFERENCES highway_district (id),
  FOREIGN KEY (state_abbreviation) REFERENCES state (abbreviation),
  FOREIGN KEY (route_id) REFERENCES route (id),
  FOREIGN KEY (county_id) REFERENCES county (id)
)
";

/// Drop all tables, children first so foreign keys never dangle.
pub async fn drop_schema(pool: &SqlitePool) -> Result<()> {
    for table in ["bridge", "county", "route", "state", "highway_district"] {
        sqlx::query(&format!("DROP TABLE IF EXISTS {}", table))
            .execute(pool)
            .await?;
    }
    Ok(())
}

/// Create all tables. Fails if they already exist; call [`drop_schema`]
/// first for a rebuild.
pub async fn create_schema(pool: &SqlitePool) -> Result<()> {
    let tables = [
        ("highway_district", CREATE_HIGHWAY_DISTRICT_TABLE),
        ("state", CREATE_STATE_TABLE),
        ("route", CREATE_ROUTE_TABLE),
        ("county", CREATE_COUNTY_TABLE),
        ("bridge", CREATE_BRIDGE_TABLE),
    ];
    for (name, ddl) in tables {
        info!("Creating {} table", name);
        sqlx::query(ddl).execute(pool).await?;
    }
    Ok(())
}
