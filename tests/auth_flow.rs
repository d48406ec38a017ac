// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Tokengate Contributors

//! End-to-end flows over the full router: registration, login, bearer
//! authentication, role gating, and failure translation.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use chrono::{Duration, Utc};
use serde_json::{json, Value};
use tower::ServiceExt;

use tokengate::api::router;
use tokengate::auth::{Claims, IssueRequest, TokenCodec, ROLE_ADMIN};
use tokengate::config::AuthProperties;
use tokengate::state::AppState;

const SECRET: &str = "integration-test-secret";

fn test_state() -> AppState {
    let codec = TokenCodec::new(&AuthProperties {
        secret_key: SECRET.to_string(),
        token_duration: Duration::seconds(3600),
    })
    .expect("valid test configuration");
    AppState::new(codec)
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    bearer: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, String) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = bearer {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn register(app: &Router, name: &str, email: &str, password: &str) -> (StatusCode, String) {
    send(
        app,
        "POST",
        "/auth/register",
        None,
        Some(json!({ "name": name, "email": email, "password": password })),
    )
    .await
}

async fn login(app: &Router, email: &str, password: &str) -> (StatusCode, String) {
    send(
        app,
        "POST",
        "/auth/login",
        None,
        Some(json!({ "email": email, "password": password })),
    )
    .await
}

#[tokio::test]
async fn health_is_public() {
    let app = router(test_state());
    let (status, body) = send(&app, "GET", "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");
}

#[tokio::test]
async fn register_login_and_access_a_protected_route() {
    let app = router(test_state());

    let (status, body) = register(&app, "alice", "alice@example.com", "s3cret-Pass").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "User registered successfully for user: alice@example.com");

    let (status, body) = login(&app, "alice@example.com", "s3cret-Pass").await;
    assert_eq!(status, StatusCode::OK);
    let response: Value = serde_json::from_str(&body).unwrap();
    let token = response["token"].as_str().unwrap();
    assert_eq!(response["email"], "alice@example.com");
    assert_eq!(response["authorities"], json!(["ROLE_USER"]));

    let (status, _) = send(&app, "GET", "/orders", Some(token), None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn protected_route_without_a_token_is_401_plain_text() {
    let app = router(test_state());
    let (status, body) = send(&app, "GET", "/orders", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, "Full authentication is required to access this resource");
}

#[tokio::test]
async fn login_with_unknown_credentials_is_401() {
    let app = router(test_state());
    let (status, body) = login(&app, "nobody@example.com", "whatever").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, "Invalid email or password");
}

#[tokio::test]
async fn duplicate_registration_is_409_with_the_message() {
    let app = router(test_state());
    register(&app, "alice", "alice@example.com", "s3cret-Pass").await;

    let (status, body) = register(&app, "alice", "other@example.com", "s3cret-Pass").await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body, "User with name alice already exists.");
}

#[tokio::test]
async fn expired_token_is_anonymous_and_gated_with_401() {
    let state = test_state();
    let now = Utc::now().timestamp();
    let expired = state
        .codec
        .encode(&Claims {
            sub: "42".to_string(),
            iat: now - 7200,
            exp: now - 3600,
            email: None,
            authorities: Some(vec![ROLE_ADMIN.to_string()]),
        })
        .unwrap();

    let app = router(state);
    // The middleware swallows the expired token; the gate then rejects.
    let (status, body) = send(&app, "GET", "/orders", Some(&expired), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, "Full authentication is required to access this resource");
}

#[tokio::test]
async fn tampered_token_is_anonymous_and_gated_with_401() {
    let state = test_state();
    let token = state
        .codec
        .issue(&IssueRequest {
            user_id: 42,
            email: None,
            authorities: vec![ROLE_ADMIN.to_string()],
        })
        .unwrap();
    // Corrupt the signature segment.
    let tampered = format!("{}AAAA", token);

    let app = router(state);
    let (status, _) = send(&app, "GET", "/users", Some(&tampered), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn admin_routes_reject_plain_users_with_403() {
    let app = router(test_state());
    register(&app, "alice", "alice@example.com", "s3cret-Pass").await;
    let (_, body) = login(&app, "alice@example.com", "s3cret-Pass").await;
    let response: Value = serde_json::from_str(&body).unwrap();
    let token = response["token"].as_str().unwrap();

    let (status, body) = send(&app, "GET", "/users", Some(token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body, "Access denied: insufficient authorities");
}

#[tokio::test]
async fn admin_token_reaches_admin_routes() {
    let state = test_state();
    // A token issued for identity 42 with the admin role is all the gate
    // needs; no matching store record is required for authorization.
    let token = state
        .codec
        .issue(&IssueRequest {
            user_id: 42,
            email: Some("admin@example.com".to_string()),
            authorities: vec![ROLE_ADMIN.to_string()],
        })
        .unwrap();

    let app = router(state);
    let (status, body) = send(&app, "GET", "/users", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "[]");
}

#[tokio::test]
async fn order_lifecycle_over_the_wire() {
    let app = router(test_state());
    register(&app, "alice", "alice@example.com", "s3cret-Pass").await;
    let (_, body) = login(&app, "alice@example.com", "s3cret-Pass").await;
    let response: Value = serde_json::from_str(&body).unwrap();
    let token = response["token"].as_str().unwrap();

    let (status, body) = send(
        &app,
        "POST",
        "/orders",
        Some(token),
        Some(json!({ "title": "first", "description": "desc" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let order: Value = serde_json::from_str(&body).unwrap();
    let order_id = order["id"].as_str().unwrap();

    let (status, _) = send(
        &app,
        "GET",
        &format!("/orders/{order_id}"),
        Some(token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, "GET", "/orders/missing", Some(token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "Order does not exist. order id: missing");

    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/orders/{order_id}"),
        Some(token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}
