use crate::db::sqlite::CredentialsStorage;
use crate::error::NamestoreError;
use crate::service::password::{DEFAULT_COST, hash_password, verify_password};
use tokio::task::spawn_blocking;
use tracing::{debug, info};

pub const TEST_LOGIN: &str = "test";
pub const TEST_PASSWORD: &str = "password";

/// Password checks against the `users` table.
#[derive(Clone)]
pub struct Authenticator {
    storage: CredentialsStorage,
    cost: u32,
}

impl Authenticator {
    pub fn new(storage: CredentialsStorage) -> Self {
        Self {
            storage,
            cost: DEFAULT_COST,
        }
    }

    /// bcrypt work factor used for newly stored hashes.
    pub fn with_cost(mut self, cost: u32) -> Self {
        self.cost = cost;
        self
    }

    /// `Ok(true)` only when `login` exists and `password` matches its stored
    /// hash. Unknown logins and wrong passwords are indistinguishable.
    pub async fn verify(&self, login: &str, password: &str) -> Result<bool, NamestoreError> {
        let Some(cred) = self.storage.get_by_login(login).await? else {
            debug!(login, "no credential for login");
            return Ok(false);
        };
        // bcrypt is CPU-bound; run it on the blocking pool
        let password = password.to_owned();
        let ok = spawn_blocking(move || verify_password(&password, &cred.password_hash)).await?;
        if !ok {
            debug!(login, "password mismatch");
        }
        Ok(ok)
    }

    /// Store `login` with a freshly salted bcrypt hash of `password`,
    /// replacing any existing row for that login.
    pub async fn register(&self, login: &str, password: &str) -> Result<(), NamestoreError> {
        let password = password.to_owned();
        let cost = self.cost;
        let hash = spawn_blocking(move || hash_password(&password, cost)).await??;
        self.storage.replace(login, &hash).await
    }

    /// Reset the fixed `test`/`password` credential. Destructive: any existing
    /// `test` row is dropped on every call.
    pub async fn seed_test_credential(&self) -> Result<(), NamestoreError> {
        self.register(TEST_LOGIN, TEST_PASSWORD).await?;
        info!(login = TEST_LOGIN, "test credential seeded");
        Ok(())
    }
}
