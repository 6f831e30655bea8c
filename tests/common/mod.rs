#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response, StatusCode},
};
use base64::Engine;
use std::{
    fs,
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};
use tower::ServiceExt;

/// Router over a throwaway SQLite file; the file is removed on drop.
pub struct TestApp {
    pub app: Router,
    pub state: namestore::NamestoreState,
    pub pool: namestore::db::SqlitePool,
    path: PathBuf,
}

impl TestApp {
    pub async fn spawn(basic_auth: bool) -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time before UNIX_EPOCH")
            .as_nanos();

        let mut path = std::env::temp_dir();
        path.push(format!(
            "namestore-test-{}-{}.sqlite",
            std::process::id(),
            nanos
        ));

        let database_url = format!("sqlite:{}", path.display());
        let pool = namestore::db::connect(&database_url)
            .await
            .expect("failed to open test database");
        namestore::db::init_schema(&pool)
            .await
            .expect("failed to init schema");

        let state = namestore::NamestoreState::new(pool.clone()).with_password_cost(4 /* bcrypt minimum cost */);
        state
            .auth
            .seed_test_credential()
            .await
            .expect("failed to seed credential");
        let app = namestore::namestore_router(state.clone(), basic_auth);

        Self {
            app,
            state,
            pool,
            path,
        }
    }

    pub async fn send(&self, req: Request<Body>) -> (StatusCode, String) {
        let resp: Response<Body> = self
            .app
            .clone()
            .oneshot(req)
            .await
            .expect("request failed");
        let status = resp.status();
        let body = to_bytes(resp.into_body(), usize::MAX)
            .await
            .expect("failed to read response body");
        let body = String::from_utf8(body.to_vec()).expect("response body was not utf-8");
        (status, body)
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
        for suffix in ["-wal", "-shm"] {
            let mut side = self.path.clone().into_os_string();
            side.push(suffix);
            let _ = fs::remove_file(side);
        }
    }
}

pub fn request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("failed to build request")
}

pub fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("failed to build request")
}

pub fn with_basic(mut req: Request<Body>, login: &str, password: &str) -> Request<Body> {
    let token = base64::engine::general_purpose::STANDARD.encode(format!("{login}:{password}"));
    req.headers_mut().insert(
        "authorization",
        format!("Basic {token}").parse().expect("invalid header value"),
    );
    req
}
