use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};

use crate::db::sqlite::{CredentialsStorage, RecordStorage, SqlitePool};
use crate::handlers::{index::hello_world, records};
use crate::middleware::auth::require_basic_auth;
use crate::service::auth::Authenticator;

/// Shared handler state, built once at startup.
#[derive(Clone)]
pub struct NamestoreState {
    pub records: RecordStorage,
    pub auth: Authenticator,
}

impl NamestoreState {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            records: RecordStorage::new(pool.clone()),
            auth: Authenticator::new(CredentialsStorage::new(pool)),
        }
    }

    /// bcrypt work factor for credentials stored through this state.
    pub fn with_password_cost(mut self, cost: u32) -> Self {
        self.auth = self.auth.with_cost(cost);
        self
    }
}

/// Build the HTTP router. With `basic_auth` set, every record route sits
/// behind the Basic Authentication gate; `/` stays open either way.
pub fn namestore_router(state: NamestoreState, basic_auth: bool) -> Router {
    let mut record_routes = Router::new()
        .route("/data", post(records::create_record))
        .route(
            "/data/{id}",
            get(records::read_record)
                .put(records::update_record)
                .delete(records::delete_record),
        )
        .route("/delete/{id}", delete(records::delete_record))
        .route("/change/{id}", put(records::update_record));

    if basic_auth {
        record_routes = record_routes
            .route_layer(middleware::from_fn_with_state(state.clone(), require_basic_auth));
    }

    Router::new()
        .route("/", get(hello_world))
        .merge(record_routes)
        .with_state(state)
}
