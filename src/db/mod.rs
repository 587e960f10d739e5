//! Database module: models and schema for persistent storage.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL for initializing the database (SQLite)
//! - `sqlite.rs`: the storage handle with CRUD primitives

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::DbVenta;
pub use schema::SQLITE_INIT;
pub use sqlite::{SalesStorage, SqlitePool};
