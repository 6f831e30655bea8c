use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};

use crate::error::NamestoreError;

/// Environment variables consulted on top of the built-in defaults.
const ENV_KEYS: [&str; 6] = [
    "database_url",
    "listen_addr",
    "loglevel",
    "basic_auth",
    "seed_test_credential",
    "password_cost",
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub loglevel: String,
    /// Put every record route behind HTTP Basic Authentication.
    pub basic_auth: bool,
    /// Delete and reinsert the `test`/`password` credential on startup.
    pub seed_test_credential: bool,
    /// bcrypt work factor for newly stored password hashes.
    pub password_cost: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite:namestore.db".to_string(),
            listen_addr: "0.0.0.0:5000".to_string(),
            loglevel: "info".to_string(),
            basic_auth: false,
            seed_test_credential: true,
            password_cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl Config {
    /// Defaults overridden by `DATABASE_URL`, `LISTEN_ADDR`, `LOGLEVEL`,
    /// `BASIC_AUTH`, `SEED_TEST_CREDENTIAL` and `PASSWORD_COST`.
    pub fn from_env() -> Result<Self, NamestoreError> {
        Self::figment(Env::raw().only(&ENV_KEYS))
    }

    fn figment(env: Env) -> Result<Self, NamestoreError> {
        let cfg = Figment::from(Serialized::defaults(Config::default()))
            .merge(env)
            .extract()?;
        Ok(cfg)
    }
}
