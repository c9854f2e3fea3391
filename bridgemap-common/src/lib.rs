//! # Bridgemap Common Library
//!
//! Shared code for the bridgemap tools and server including:
//! - NBI coordinate conversion (DMS to decimal degrees)
//! - Spreadsheet column letter mapping
//! - GeoJSON document model
//! - State reference data (names, FIPS codes, centroids)
//! - Database schema and queries
//! - Configuration loading

pub mod columns;
pub mod config;
pub mod db;
pub mod error;
pub mod geo;
pub mod geojson;
pub mod states;

pub use error::{Error, Result};
