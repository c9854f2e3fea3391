//! HTTP API handlers for bridgemap-server

pub mod bridges;
pub mod health;
pub mod states;
pub mod ui;

pub use bridges::get_state_bridges;
pub use health::health_routes;
pub use states::list_states;
pub use ui::{serve_app_js, serve_index};
