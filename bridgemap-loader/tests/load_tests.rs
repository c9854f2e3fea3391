//! Integration tests for the database loader

use bridgemap_common::db;
use bridgemap_common::geojson::{BridgeProperties, Feature, FeatureCollection};
use bridgemap_common::states;
use bridgemap_loader::{load_state, rebuild_schema};
use tempfile::TempDir;

fn props(structure: &str, district: &str, route: &str, fips: Option<&str>) -> BridgeProperties {
    BridgeProperties {
        state_code: "42".to_string(),
        structure_number: structure.to_string(),
        route_number: route.to_string(),
        highway_district002: district.to_string(),
        county_code003: "001".to_string(),
        features_desc006_a: format!("CREEK {}", structure),
        facility_carried007: "US 30".to_string(),
        location_details: "NEAR TOWN".to_string(),
        min_vert_clear010: "99.99".to_string(),
        kilo_point011: "0".to_string(),
        lrs_inv_route013_a: "".to_string(),
        lat016: "40060000".to_string(),
        long017: "77300000".to_string(),
        lat: 40.1,
        lon: -77.5,
        county_name: fips.map(|_| "Adams".to_string()),
        county_fips: fips.map(|f| f.to_string()),
        county_population: fips.map(|_| 1000),
    }
}

fn collection(features: Vec<BridgeProperties>) -> String {
    let collection =
        FeatureCollection::new(features.into_iter().map(Feature::from_properties).collect());
    serde_json::to_string_pretty(&collection).unwrap()
}

async fn fresh_pool(dir: &TempDir) -> sqlx::SqlitePool {
    let pool = db::init_database(&dir.path().join("bridges.db"))
        .await
        .unwrap();
    rebuild_schema(&pool).await.unwrap();
    pool
}

#[tokio::test]
async fn loads_state_with_distinct_dimensions() {
    let dir = TempDir::new().unwrap();
    let pool = fresh_pool(&dir).await;
    let pa = states::find("PA").unwrap();

    // Three bridges, two sharing a district/route/county
    let text = collection(vec![
        props("100", "8", "30", Some("42001")),
        props("101", "8", "30", Some("42001")),
        props("102", "5", "15", Some("42003")),
    ]);

    let summary = load_state(&pool, pa, &text).await.unwrap();
    assert_eq!(summary.bridges, 3);
    assert_eq!(summary.highway_districts, 2);
    assert_eq!(summary.routes, 2);
    assert_eq!(summary.counties, 2);

    assert_eq!(db::count_rows(&pool, "bridge").await.unwrap(), 3);
    assert_eq!(db::count_rows(&pool, "county").await.unwrap(), 2);

    // The stored blob is the input text, verbatim
    let blob = db::fetch_state_geojson(&pool, "PA").await.unwrap().unwrap();
    assert_eq!(blob, text);
}

#[tokio::test]
async fn absent_enrichment_maps_to_missing_placeholders() {
    let dir = TempDir::new().unwrap();
    let pool = fresh_pool(&dir).await;
    let pa = states::find("PA").unwrap();

    let mut bridge = props("200", "", "", None);
    bridge.features_desc006_a = String::new();
    bridge.location_details = String::new();
    let text = collection(vec![bridge]);

    let summary = load_state(&pool, pa, &text).await.unwrap();
    assert_eq!(summary.bridges, 1);
    // One "missing" row per dimension
    assert_eq!(summary.highway_districts, 1);
    assert_eq!(summary.routes, 1);
    assert_eq!(summary.counties, 1);

    let row: (String, String, String, String) = sqlx::query_as(
        "SELECT highway_district_id, route_id, county_id, name FROM bridge WHERE id = '200'",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(row.0, "missing");
    assert_eq!(row.1, "missing");
    assert_eq!(row.2, "missing");
    assert_eq!(row.3, "missing name");
}

#[tokio::test]
async fn load_is_transactional() {
    let dir = TempDir::new().unwrap();
    let pool = fresh_pool(&dir).await;
    let pa = states::find("PA").unwrap();

    // Duplicate structure numbers abort the load partway through
    let text = collection(vec![
        props("300", "8", "30", Some("42001")),
        props("300", "8", "30", Some("42001")),
    ]);

    assert!(load_state(&pool, pa, &text).await.is_err());
    assert_eq!(db::count_rows(&pool, "bridge").await.unwrap(), 0);
    assert_eq!(db::count_rows(&pool, "state").await.unwrap(), 0);
}

#[tokio::test]
async fn rejects_invalid_geojson() {
    let dir = TempDir::new().unwrap();
    let pool = fresh_pool(&dir).await;
    let pa = states::find("PA").unwrap();

    assert!(load_state(&pool, pa, "not json").await.is_err());
    assert!(load_state(&pool, pa, r#"{"type":"FeatureCollection"}"#)
        .await
        .is_err());
}

#[tokio::test]
async fn per_bridge_geojson_blob_is_a_feature() {
    let dir = TempDir::new().unwrap();
    let pool = fresh_pool(&dir).await;
    let pa = states::find("PA").unwrap();

    let text = collection(vec![props("400", "8", "30", Some("42001"))]);
    load_state(&pool, pa, &text).await.unwrap();

    let (blob,): (String,) =
        sqlx::query_as("SELECT bridge_geojson FROM bridge WHERE id = '400'")
            .fetch_one(&pool)
            .await
            .unwrap();
    let feature: serde_json::Value = serde_json::from_str(&blob).unwrap();
    assert_eq!(feature["type"], "Feature");
    assert_eq!(feature["properties"]["structureNumber"], "400");
}
