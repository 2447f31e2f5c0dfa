//! Database module: models and schema for the password history store.
//!
//! Layout:
//! - `models.rs`: the persisted record and its row mapping
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `sqlite.rs`: `HistoryStorage`, the create/list/delete operations

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::{NewPasswordRecord, PasswordRecord};
pub use schema::SQLITE_INIT;
pub use sqlite::{HISTORY_LIMIT, HistoryStorage, SqlitePool, connect};
