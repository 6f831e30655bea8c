//! SQL DDL for the record and credential tables.
//! SQLite-first design; can be adapted for other RDBMS.

/// SQLite schema with:
/// - `data`: `id` INTEGER PRIMARY KEY AUTOINCREMENT, ids are never reused
/// - `users`: `login` UNIQUE, `password_hash` BLOB holding salt followed by digest
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS data (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS users (
    login TEXT NOT NULL UNIQUE,
    password_hash BLOB NOT NULL
);
"#;
