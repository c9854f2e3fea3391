//! Per-state bridge GeoJSON endpoint

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use bridgemap_common::db::fetch_state_geojson;
use bridgemap_common::geojson::FeatureCollection;

use crate::AppState;

/// GET /api/bridges/:state_abbreviation
///
/// Returns the precomputed FeatureCollection for the requested state. An
/// unknown or not-yet-loaded state gets the empty collection so the map
/// client keeps working.
pub async fn get_state_bridges(
    State(state): State<AppState>,
    Path(state_abbreviation): Path<String>,
) -> Result<Response, BridgesError> {
    let blob = fetch_state_geojson(&state.db, &state_abbreviation.to_ascii_uppercase())
        .await
        .map_err(|e| BridgesError::Database(e.to_string()))?;

    match blob {
        Some(geojson) => {
            tracing::debug!(
                "{}: {} bytes of stored GeoJSON",
                state_abbreviation,
                geojson.len()
            );
            // The blob is already serialized; return it verbatim
            Ok((
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                geojson,
            )
                .into_response())
        }
        None => {
            tracing::debug!("{}: no loaded data, returning empty collection", state_abbreviation);
            Ok(Json(FeatureCollection::empty()).into_response())
        }
    }
}

/// Bridges API errors
#[derive(Debug)]
pub enum BridgesError {
    Database(String),
}

impl IntoResponse for BridgesError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            BridgesError::Database(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", msg),
            ),
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
