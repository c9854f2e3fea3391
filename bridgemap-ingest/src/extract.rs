//! NBI column extraction
//!
//! The NBI delimited files carry well over a hundred columns per bridge;
//! only a configured subset is kept. Each kept field is named by its
//! spreadsheet column letter because that is how the columns are identified
//! when eyeballing the source file, and the letters are mapped to record
//! indices at extraction time.

use std::collections::BTreeMap;

use bridgemap_common::columns::column_index;
use bridgemap_common::geo::nbi_lat_lon;
use bridgemap_common::geojson::BridgeProperties;
use bridgemap_common::{Error, Result};

/// One entry of the column configuration.
#[derive(Debug, Clone, Copy)]
pub struct ColumnSpec {
    /// Property name in the emitted GeoJSON.
    pub name: &'static str,
    /// Spreadsheet column letter in the source file.
    pub column: &'static str,
    /// Numeric fields are normalized (float parse, re-render) to strip
    /// zero padding.
    pub numeric: bool,
}

/// The NBI subset extracted for each bridge.
pub const COLUMNS: &[ColumnSpec] = &[
    ColumnSpec { name: "stateCode", column: "A", numeric: false },
    ColumnSpec { name: "structureNumber", column: "B", numeric: true },
    ColumnSpec { name: "routeNumber", column: "F", numeric: true },
    ColumnSpec { name: "highwayDistrict002", column: "H", numeric: true },
    ColumnSpec { name: "countyCode003", column: "I", numeric: false },
    ColumnSpec { name: "featuresDesc006A", column: "K", numeric: false },
    ColumnSpec { name: "facilityCarried007", column: "M", numeric: false },
    ColumnSpec { name: "locationDetails", column: "N", numeric: false },
    ColumnSpec { name: "minVertClear010", column: "O", numeric: false },
    ColumnSpec { name: "kiloPoint011", column: "P", numeric: false },
    ColumnSpec { name: "lrsInvRoute013A", column: "R", numeric: false },
    ColumnSpec { name: "lat016", column: "T", numeric: false },
    ColumnSpec { name: "long017", column: "U", numeric: false },
];

/// Normalize a numeric field: zero-padded integers render without padding
/// ("00123" -> "123"), non-numeric values fall back to a trim.
fn normalize_numeric(raw: &str) -> String {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        Ok(value) => format!("{}", value),
        Err(_) => trimmed.to_string(),
    }
}

/// Extract the configured fields of one CSV record, keyed by property name.
pub fn extract_fields(record: &csv::StringRecord) -> Result<BTreeMap<&'static str, String>> {
    let mut fields = BTreeMap::new();
    for spec in COLUMNS {
        let index = column_index(spec.column)?;
        let raw = record.get(index).ok_or_else(|| {
            Error::InvalidInput(format!(
                "record has {} fields, column {} (index {}) missing",
                record.len(),
                spec.column,
                index
            ))
        })?;
        let value = if spec.numeric {
            normalize_numeric(raw)
        } else {
            raw.to_string()
        };
        fields.insert(spec.name, value);
    }
    Ok(fields)
}

/// Map one CSV record to bridge properties, computing decimal coordinates
/// from the packed DMS fields.
pub fn record_to_properties(record: &csv::StringRecord) -> Result<BridgeProperties> {
    let mut fields = extract_fields(record)?;
    let mut take = |name: &'static str| fields.remove(name).unwrap_or_default();

    let lat016 = take("lat016");
    let long017 = take("long017");
    let (lat, lon) = nbi_lat_lon(&lat016, &long017)?;

    Ok(BridgeProperties {
        state_code: take("stateCode"),
        structure_number: take("structureNumber"),
        route_number: take("routeNumber"),
        highway_district002: take("highwayDistrict002"),
        county_code003: take("countyCode003"),
        features_desc006_a: take("featuresDesc006A"),
        facility_carried007: take("facilityCarried007"),
        location_details: take("locationDetails"),
        min_vert_clear010: take("minVertClear010"),
        kilo_point011: take("kiloPoint011"),
        lrs_inv_route013_a: take("lrsInvRoute013A"),
        lat016,
        long017,
        lat,
        lon,
        county_name: None,
        county_fips: None,
        county_population: None,
    })
}
