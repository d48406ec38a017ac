// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Tokengate Contributors

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::auth::{AuthService, StoreCredentialVerifier, TokenCodec};
use crate::store::{OrderStore, UserStore};

/// Shared application state. The codec and classification table are built
/// once at startup and only read afterwards; the stores sit behind
/// read-write locks.
#[derive(Clone)]
pub struct AppState {
    pub codec: Arc<TokenCodec>,
    pub auth: Arc<AuthService<StoreCredentialVerifier>>,
    pub users: Arc<RwLock<UserStore>>,
    pub orders: Arc<RwLock<OrderStore>>,
}

impl AppState {
    pub fn new(codec: TokenCodec) -> Self {
        let codec = Arc::new(codec);
        let users = Arc::new(RwLock::new(UserStore::new()));
        let verifier = StoreCredentialVerifier::new(users.clone());
        let auth = Arc::new(AuthService::new(codec.clone(), verifier));

        Self {
            codec,
            auth,
            users,
            orders: Arc::new(RwLock::new(OrderStore::new())),
        }
    }

    /// State with a fixed secret and a one-hour validity, for unit tests.
    #[cfg(test)]
    pub fn for_tests(secret: &str) -> Self {
        use crate::config::AuthProperties;

        let codec = TokenCodec::new(&AuthProperties {
            secret_key: secret.to_string(),
            token_duration: chrono::Duration::seconds(3600),
        })
        .expect("test codec configuration is valid");
        Self::new(codec)
    }
}
