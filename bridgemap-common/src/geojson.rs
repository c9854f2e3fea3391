//! GeoJSON document model for bridge data
//!
//! The ingest tool emits one FeatureCollection per state; the loader stores
//! the serialized collection in `state.bridges_geojson` and the API server
//! returns it verbatim. Key names are camelCase on the wire, the form the
//! map client consumes.

use serde::{Deserialize, Serialize};

/// CRS identifier used on every collection we emit.
pub const CRS84: &str = "urn:ogc:def:crs:OGC:1.3:CRS84";

/// A GeoJSON FeatureCollection of bridges.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub kind: String,
    pub crs: Crs,
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    /// Collection with the standard CRS and the given features.
    pub fn new(features: Vec<Feature>) -> Self {
        Self {
            kind: "FeatureCollection".to_string(),
            crs: Crs::crs84(),
            features,
        }
    }

    /// Empty collection, returned for states with no loaded data so the
    /// map client keeps working.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }
}

/// Named coordinate reference system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Crs {
    #[serde(rename = "type")]
    pub kind: String,
    pub properties: CrsProperties,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrsProperties {
    pub name: String,
}

impl Crs {
    pub fn crs84() -> Self {
        Self {
            kind: "name".to_string(),
            properties: CrsProperties {
                name: CRS84.to_string(),
            },
        }
    }
}

/// A single bridge feature.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub kind: String,
    pub properties: BridgeProperties,
    pub geometry: Geometry,
}

impl Feature {
    /// Point feature at the record's computed coordinates.
    pub fn from_properties(properties: BridgeProperties) -> Self {
        let geometry = Geometry::point(properties.lon, properties.lat);
        Self {
            kind: "Feature".to_string(),
            properties,
            geometry,
        }
    }
}

/// Point geometry. Coordinates are `[lon, lat, elevation]` per GeoJSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Geometry {
    #[serde(rename = "type")]
    pub kind: String,
    pub coordinates: [f64; 3],
}

impl Geometry {
    pub fn point(lon: f64, lat: f64) -> Self {
        Self {
            kind: "Point".to_string(),
            coordinates: [lon, lat, 0.0],
        }
    }
}

/// The NBI field subset carried per bridge, plus computed coordinates and
/// county enrichment. Field names follow the NBI item numbering the source
/// columns use (e.g. item 16 = latitude).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BridgeProperties {
    pub state_code: String,
    pub structure_number: String,
    pub route_number: String,
    pub highway_district002: String,
    pub county_code003: String,
    pub features_desc006_a: String,
    pub facility_carried007: String,
    pub location_details: String,
    pub min_vert_clear010: String,
    pub kilo_point011: String,
    pub lrs_inv_route013_a: String,
    pub lat016: String,
    pub long017: String,

    /// Decimal degrees computed from `lat016` / `long017`.
    pub lat: f64,
    pub lon: f64,

    /// County enrichment from the FCC Area API; absent when the lookup was
    /// skipped or failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub county_name: Option<String>,
    #[serde(rename = "countyFIPS", skip_serializing_if = "Option::is_none")]
    pub county_fips: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub county_population: Option<i64>,
}
