//! State listing endpoint
//!
//! The map UI builds its state picker and fly-to targets from this list
//! instead of hard-coding the reference table client-side.

use axum::Json;
use serde::Serialize;

use bridgemap_common::states::STATES;

/// One state entry as the UI consumes it.
#[derive(Debug, Serialize)]
pub struct StateEntry {
    pub abbreviation: &'static str,
    pub name: &'static str,
    pub lat: f64,
    pub lon: f64,
}

/// GET /api/states
pub async fn list_states() -> Json<Vec<StateEntry>> {
    let mut states: Vec<StateEntry> = STATES
        .iter()
        .map(|s| StateEntry {
            abbreviation: s.abbreviation,
            name: s.name,
            lat: s.lat,
            lon: s.lon,
        })
        .collect();
    states.sort_by_key(|s| s.name);
    Json(states)
}
