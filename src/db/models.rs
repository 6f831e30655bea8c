use sqlx::FromRow;

/// A row of the `data` table.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Record {
    pub id: i64,
    pub name: String,
}

/// A row of the `users` table.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct DbCredential {
    pub login: String,
    pub password_hash: Vec<u8>,
}
