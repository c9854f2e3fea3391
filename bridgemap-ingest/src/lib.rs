//! bridgemap-ingest library
//!
//! Turns an NBI delimited file into an enriched GeoJSON FeatureCollection:
//! column extraction and coordinate conversion in [`extract`], county
//! enrichment via the FCC Area API in [`fcc`], orchestration in
//! [`pipeline`].

pub mod extract;
pub mod fcc;
pub mod pipeline;
