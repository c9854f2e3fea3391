//! Database layer: connection setup, schema and queries

pub mod init;
pub mod queries;
pub mod schema;

pub use init::*;
pub use queries::*;
pub use schema::*;
