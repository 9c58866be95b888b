//! Storage layer
//!
//! SQLite schema management and typed storage errors. The store itself
//! lives in `crate::store`; this module owns what sits underneath it.

pub mod error;
pub mod schema;

pub use error::{StoreError, StoreResult};
pub use schema::{get_schema_version, init_schema, needs_init, SCHEMA_VERSION};
