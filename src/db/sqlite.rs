use crate::db::models::{DbCredential, Record};
use crate::db::schema::SQLITE_INIT;
use crate::error::NamestoreError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;

pub type SqlitePool = Pool<Sqlite>;

/// Open a pool for `database_url`, creating the database file if missing.
pub async fn connect(database_url: &str) -> Result<SqlitePool, NamestoreError> {
    let connect_opts = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new().connect_with(connect_opts).await?;
    Ok(pool)
}

/// Initialize the schema by executing the bundled DDL.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), NamestoreError> {
    // sqlx::query runs a single statement, so split the script
    for stmt in SQLITE_INIT.split(';') {
        let s = stmt.trim();
        if s.is_empty() {
            continue;
        }
        sqlx::query(s).execute(pool).await?;
    }
    Ok(())
}

#[derive(Clone)]
pub struct RecordStorage {
    pool: SqlitePool,
}

impl RecordStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new record. Returns the generated id.
    pub async fn insert(&self, name: &str) -> Result<i64, NamestoreError> {
        let id: i64 = sqlx::query_scalar("INSERT INTO data (name) VALUES (?) RETURNING id")
            .bind(name)
            .fetch_one(&self.pool)
            .await?;
        Ok(id)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<Record>, NamestoreError> {
        let rec = sqlx::query_as::<_, Record>("SELECT id, name FROM data WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(rec)
    }

    /// Delete by id. Returns `false` when no row had that id.
    pub async fn delete_by_id(&self, id: i64) -> Result<bool, NamestoreError> {
        let res = sqlx::query("DELETE FROM data WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }

    /// Overwrite the name of an existing record. Returns `false` when no row
    /// had that id.
    pub async fn update_name(&self, id: i64, name: &str) -> Result<bool, NamestoreError> {
        let res = sqlx::query("UPDATE data SET name = ? WHERE id = ?")
            .bind(name)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }
}

#[derive(Clone)]
pub struct CredentialsStorage {
    pool: SqlitePool,
}

impl CredentialsStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn get_by_login(&self, login: &str) -> Result<Option<DbCredential>, NamestoreError> {
        let cred = sqlx::query_as::<_, DbCredential>(
            "SELECT login, password_hash FROM users WHERE login = ?",
        )
        .bind(login)
        .fetch_optional(&self.pool)
        .await?;
        Ok(cred)
    }

    /// Drop any row for `login` and insert the given hash, in one transaction.
    pub async fn replace(&self, login: &str, password_hash: &[u8]) -> Result<(), NamestoreError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM users WHERE login = ?")
            .bind(login)
            .execute(&mut *tx)
            .await?;
        sqlx::query("INSERT INTO users (login, password_hash) VALUES (?, ?)")
            .bind(login)
            .bind(password_hash)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }
}
