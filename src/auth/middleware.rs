// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Tokengate Contributors

//! Authentication middleware.
//!
//! Runs once per request: extracts a bearer token from the `Authorization`
//! header, verifies and converts it, and scopes the resulting principal into
//! the [`SecurityContext`] for the rest of the call. The middleware fails
//! open locally — a missing header or an unverifiable token leaves the
//! context empty and the request proceeds anonymous; rejecting the call is
//! the authorization gate's decision, so public routes work without tokens
//! while protected routes still turn invalid ones away.
//!
//! Per-call states: no token → token present → decoded → principal
//! installed, short-circuiting to anonymous on any failure.

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};

use super::context::SecurityContext;
use super::principal::to_principal;
use crate::state::AppState;

/// Authenticate the request and run the rest of the stack inside a scoped
/// security context. The context is cleared when the scope ends, on every
/// exit path.
pub async fn authenticate(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let principal = match bearer_token(request.headers()) {
        None => None,
        Some(token) => match state
            .codec
            .verify(token)
            .and_then(|claims| to_principal(&claims))
        {
            Ok(principal) => Some(principal),
            Err(err) => {
                // Swallowed: the gate rejects later if the route needs auth.
                tracing::debug!("discarding unverifiable bearer token: {err}");
                None
            }
        },
    };

    SecurityContext::scope(principal, next.run(request)).await
}

/// Extract the bearer token from the `Authorization` header.
///
/// An absent header is not malformed; a value without the `Bearer ` prefix
/// is treated the same as no token.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::StatusCode, routing::get, Router};
    use chrono::{Duration, Utc};
    use tower::ServiceExt;

    use crate::auth::claims::Claims;
    use crate::auth::codec::IssueRequest;
    use crate::state::AppState;

    fn test_state() -> AppState {
        AppState::for_tests("middleware-test-secret")
    }

    /// Probe handler reporting what the middleware installed.
    async fn whoami() -> String {
        match SecurityContext::current() {
            Some(principal) => format!("user:{}", principal.user_id),
            None => "anonymous".to_string(),
        }
    }

    fn probe_router(state: AppState) -> Router {
        Router::new()
            .route("/whoami", get(whoami))
            .layer(axum::middleware::from_fn_with_state(
                state.clone(),
                authenticate,
            ))
            .with_state(state)
    }

    async fn probe(router: Router, authorization: Option<String>) -> (StatusCode, String) {
        let mut builder = axum::http::Request::builder().uri("/whoami");
        if let Some(value) = authorization {
            builder = builder.header(AUTHORIZATION, value);
        }
        let response = router
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[test]
    fn bearer_token_requires_the_prefix() {
        let mut headers = HeaderMap::new();
        assert!(bearer_token(&headers).is_none());

        headers.insert(AUTHORIZATION, "Token abc".parse().unwrap());
        assert!(bearer_token(&headers).is_none());

        headers.insert(AUTHORIZATION, "Bearer abc".parse().unwrap());
        assert_eq!(bearer_token(&headers), Some("abc"));
    }

    #[tokio::test]
    async fn missing_header_proceeds_anonymous() {
        let (status, body) = probe(probe_router(test_state()), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "anonymous");
    }

    #[tokio::test]
    async fn valid_token_installs_the_principal() {
        let state = test_state();
        let token = state
            .codec
            .issue(&IssueRequest {
                user_id: 42,
                email: None,
                authorities: vec!["ROLE_ADMIN".to_string()],
            })
            .unwrap();

        let (status, body) =
            probe(probe_router(state), Some(format!("Bearer {token}"))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "user:42");
    }

    #[tokio::test]
    async fn garbage_token_proceeds_anonymous() {
        let (status, body) = probe(
            probe_router(test_state()),
            Some("Bearer definitely.not.a-token".to_string()),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "anonymous");
    }

    #[tokio::test]
    async fn expired_token_proceeds_anonymous() {
        let state = test_state();
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: "42".to_string(),
            iat: now - 7200,
            exp: now - 3600,
            email: None,
            authorities: None,
        };
        let token = state.codec.encode(&claims).unwrap();

        let (status, body) =
            probe(probe_router(state), Some(format!("Bearer {token}"))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "anonymous");
    }

    #[tokio::test]
    async fn non_prefixed_header_is_treated_as_no_token() {
        let state = test_state();
        let token = state
            .codec
            .issue(&IssueRequest {
                user_id: 42,
                email: None,
                authorities: vec![],
            })
            .unwrap();

        // Valid token, but not presented as a bearer credential.
        let (status, body) = probe(probe_router(state), Some(token)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "anonymous");
    }

    #[tokio::test]
    async fn issued_test_tokens_outlive_the_run() {
        // Guards the test fixture: issued tokens must outlive the test run.
        let state = test_state();
        let token = state
            .codec
            .issue(&IssueRequest {
                user_id: 1,
                email: None,
                authorities: vec![],
            })
            .unwrap();
        let claims = state.codec.verify(&token).unwrap();
        assert!(claims.exp - claims.iat >= Duration::minutes(5).num_seconds());
    }
}
