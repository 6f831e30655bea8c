mod common;

use axum::http::StatusCode;
use common::{TestApp, json_request, request, with_basic};

#[tokio::test]
async fn root_stays_open_with_auth_enabled() {
    let t = TestApp::spawn(true).await;
    let (status, body) = t.send(request("GET", "/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Hello, World!");
}

#[tokio::test]
async fn record_routes_require_credentials() {
    let t = TestApp::spawn(true).await;

    let cases = [
        json_request("POST", "/data", r#"{"name":"alice"}"#),
        request("GET", "/data/1"),
        json_request("PUT", "/data/1", r#"{"name":"bob"}"#),
        request("DELETE", "/data/1"),
        json_request("PUT", "/change/1", r#"{"name":"bob"}"#),
        request("DELETE", "/delete/1"),
    ];
    for req in cases {
        let uri = req.uri().to_string();
        let (status, body) = t.send(req).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{uri}");
        assert_eq!(body, "unauthorized");
    }
}

#[tokio::test]
async fn wrong_credentials_short_circuit_the_handler() {
    let t = TestApp::spawn(true).await;

    let (status, _) = t
        .send(with_basic(
            json_request("POST", "/data", r#"{"name":"alice"}"#),
            "test",
            "wrong",
        ))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = t
        .send(with_basic(
            json_request("POST", "/data", r#"{"name":"alice"}"#),
            "nosuchuser",
            "password",
        ))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // Neither attempt reached the insert.
    let created = t.state.records.get_by_id(1).await.unwrap();
    assert!(created.is_none());
}

#[tokio::test]
async fn gate_runs_before_validation() {
    let t = TestApp::spawn(true).await;
    let (status, _) = t.send(request("GET", "/data/not-a-number")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = t
        .send(with_basic(
            request("GET", "/data/not-a-number"),
            "test",
            "password",
        ))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "integer ID expected");
}

#[tokio::test]
async fn seeded_credential_unlocks_the_lifecycle() {
    let t = TestApp::spawn(true).await;
    let auth = |req| with_basic(req, "test", "password");

    let (status, body) = t
        .send(auth(json_request("POST", "/data", r#"{"name":"alice"}"#)))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, "1");

    let (status, body) = t.send(auth(request("GET", "/data/1"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#""alice""#);

    let (status, _) = t
        .send(auth(json_request("PUT", "/change/1", r#"{"name":"bob"}"#)))
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = t.send(auth(request("GET", "/data/1"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#""bob""#);

    let (status, _) = t.send(auth(request("DELETE", "/delete/1"))).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = t.send(auth(request("GET", "/data/1"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn verify_matches_seeded_credential() {
    let t = TestApp::spawn(true).await;
    assert!(t.state.auth.verify("test", "password").await.unwrap());
    assert!(!t.state.auth.verify("test", "wrong").await.unwrap());
    assert!(!t.state.auth.verify("nosuchuser", "anything").await.unwrap());
}

#[tokio::test]
async fn malformed_authorization_header_is_unauthorized() {
    let t = TestApp::spawn(true).await;
    let mut req = request("GET", "/data/1");
    req.headers_mut()
        .insert("authorization", "Basic !!!not-base64!!!".parse().unwrap());
    let (status, body) = t.send(req).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, "unauthorized");
}

#[tokio::test]
async fn credential_lookup_failure_is_an_internal_error() {
    let t = TestApp::spawn(true).await;
    sqlx::query("DROP TABLE users")
        .execute(&t.pool)
        .await
        .expect("failed to drop users table");

    let (status, body) = t
        .send(with_basic(request("GET", "/data/1"), "test", "password"))
        .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.contains(r#""code":"INTERNAL_ERROR""#));
}
