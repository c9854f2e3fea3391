//! Integration tests for database initialization, schema and queries

use bridgemap_common::db;
use bridgemap_common::db::{BridgeRow, StateRow};
use tempfile::TempDir;

async fn fresh_db(dir: &TempDir) -> sqlx::SqlitePool {
    let path = dir.path().join("bridges.db");
    let pool = db::init_database(&path).await.expect("init database");
    db::create_schema(&pool).await.expect("create schema");
    pool
}

fn sample_state(blob: Option<&str>) -> StateRow {
    StateRow {
        id: "42".to_string(),
        abbreviation: "PA".to_string(),
        name: "Pennsylvania".to_string(),
        bridges_geojson: blob.map(|s| s.to_string()),
    }
}

#[tokio::test]
async fn schema_creates_and_rebuilds() {
    let dir = TempDir::new().unwrap();
    let pool = fresh_db(&dir).await;

    for table in ["highway_district", "state", "route", "county", "bridge"] {
        assert_eq!(db::count_rows(&pool, table).await.unwrap(), 0);
    }

    // Rebuild must succeed on a populated database
    db::insert_state(&pool, &sample_state(None)).await.unwrap();
    db::drop_schema(&pool).await.unwrap();
    db::create_schema(&pool).await.unwrap();
    assert_eq!(db::count_rows(&pool, "state").await.unwrap(), 0);
}

#[tokio::test]
async fn state_geojson_round_trip() {
    let dir = TempDir::new().unwrap();
    let pool = fresh_db(&dir).await;

    let blob = r#"{"type":"FeatureCollection","features":[]}"#;
    db::insert_state(&pool, &sample_state(Some(blob)))
        .await
        .unwrap();

    let fetched = db::fetch_state_geojson(&pool, "PA").await.unwrap();
    assert_eq!(fetched.as_deref(), Some(blob));

    // Unknown state yields None, as does a loaded state without a blob
    assert!(db::fetch_state_geojson(&pool, "ZZ").await.unwrap().is_none());
}

#[tokio::test]
async fn bridge_insert_with_dimensions() {
    let dir = TempDir::new().unwrap();
    let pool = fresh_db(&dir).await;

    db::insert_state(&pool, &sample_state(None)).await.unwrap();
    db::insert_highway_district(&pool, "8", "8 - Hwy District Name Missing")
        .await
        .unwrap();
    db::insert_route(&pool, "30", "30 - Route Name Missing")
        .await
        .unwrap();
    db::insert_county(&pool, "42001", "PA", "Adams", 0)
        .await
        .unwrap();

    let bridge = BridgeRow {
        id: "12345".to_string(),
        highway_district_id: "8".to_string(),
        state_abbreviation: "PA".to_string(),
        route_id: "30".to_string(),
        county_id: "42001".to_string(),
        name: "YELLOW BREECHES CREEK".to_string(),
        description: "YELLOW BREECHES CREEK".to_string(),
        location_details: "2 MI E OF GETTYSBURG".to_string(),
        lat: 40.1,
        lon: -77.5,
        bridge_geojson: Some(r#"{"type":"Feature"}"#.to_string()),
    };
    db::insert_bridge(&pool, &bridge).await.unwrap();

    assert_eq!(db::count_rows(&pool, "bridge").await.unwrap(), 1);

    // Duplicate primary key must be rejected
    assert!(db::insert_bridge(&pool, &bridge).await.is_err());
}

#[tokio::test]
async fn readonly_connection_rejects_writes() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bridges.db");
    {
        let pool = db::init_database(&path).await.unwrap();
        db::create_schema(&pool).await.unwrap();
        pool.close().await;
    }

    let ro = db::connect_readonly(&path).await.unwrap();
    let result = sqlx::query("INSERT INTO route (id, name) VALUES ('1', 'x')")
        .execute(&ro)
        .await;
    assert!(result.is_err(), "write should fail on read-only connection");
}

#[tokio::test]
async fn readonly_connection_requires_existing_file() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.db");
    assert!(db::connect_readonly(&missing).await.is_err());
}
