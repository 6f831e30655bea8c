//! Database module: row models, schema and SQLite-backed storage.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `sqlite.rs`: pool bootstrap plus record and credential storage

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::{DbCredential, Record};
pub use schema::SQLITE_INIT;
pub use sqlite::{CredentialsStorage, RecordStorage, SqlitePool, connect, init_schema};
