// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Tokengate Contributors

use std::env;

use tracing_subscriber::EnvFilter;

use tokengate::api::router;
use tokengate::auth::verifier::hash_password;
use tokengate::auth::{TokenCodec, ROLE_ADMIN};
use tokengate::config::{self, AuthProperties};
use tokengate::error;
use tokengate::state::AppState;

#[tokio::main]
async fn main() {
    init_tracing();

    // Configuration failures abort startup; nothing is validated per request.
    let properties = AuthProperties::from_env().unwrap_or_else(|err| {
        eprintln!("configuration error: {err}");
        std::process::exit(1);
    });
    let codec = TokenCodec::new(&properties).unwrap_or_else(|err| {
        eprintln!("configuration error: {err}");
        std::process::exit(1);
    });
    let addr = config::bind_address().unwrap_or_else(|err| {
        eprintln!("configuration error: {err}");
        std::process::exit(1);
    });

    error::init_classification();

    let state = AppState::new(codec);
    bootstrap_admin(&state).await;

    let app = router(state);

    tracing::info!("Tokengate listening on http://{addr} (docs at /docs)");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("HTTP server failed");
}

/// Create the bootstrap admin account when the corresponding environment
/// variables are present. Without it a fresh instance has no admin and the
/// admin-only routes are unreachable.
async fn bootstrap_admin(state: &AppState) {
    let (Ok(email), Ok(password)) = (
        env::var(config::ADMIN_EMAIL_ENV),
        env::var(config::ADMIN_PASSWORD_ENV),
    ) else {
        return;
    };

    let password_hash = match hash_password(&password) {
        Ok(hash) => hash,
        Err(err) => {
            eprintln!("failed to hash bootstrap admin password: {err}");
            std::process::exit(1);
        }
    };

    let mut users = state.users.write().await;
    match users.insert_user("admin", &email, password_hash, ROLE_ADMIN) {
        Ok(user) => tracing::info!("bootstrap admin account created: {}", user.email),
        Err(err) => tracing::warn!("bootstrap admin account not created: {err}"),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));

    let format = env::var(config::LOG_FORMAT_ENV).unwrap_or_default();
    if format.eq_ignore_ascii_case("json") {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install ctrl-c handler");
    tracing::info!("shutdown signal received");
}
