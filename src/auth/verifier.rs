// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Tokengate Contributors

//! Credential verification boundary.
//!
//! The authentication service treats credential checking as an opaque
//! capability behind [`CredentialVerifier`]. The production implementation
//! looks the user up in the user store and verifies the stored Argon2id
//! password hash; tests substitute their own implementations.

use std::future::Future;
use std::sync::Arc;

use argon2::{
    password_hash::{PasswordHasher, SaltString},
    Argon2, PasswordHash, PasswordVerifier,
};
use tokio::sync::RwLock;

use super::principal::Principal;
use crate::error::AppError;
use crate::store::UserStore;

/// Verifies a login identifier and secret, producing a [`Principal`].
pub trait CredentialVerifier: Send + Sync {
    fn verify(
        &self,
        identifier: &str,
        secret: &str,
    ) -> impl Future<Output = Result<Principal, AppError>> + Send;
}

/// Hash a password with Argon2id for storage.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(rand::thread_rng());
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AppError::Configuration("failed to hash password".to_string()))
}

/// Verify a password against a stored Argon2id hash.
pub fn verify_password(password: &str, hash: &str) -> Result<(), AppError> {
    let parsed = PasswordHash::new(hash).map_err(|_| AppError::InvalidCredentials)?;
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .map_err(|_| AppError::InvalidCredentials)
}

/// Store-backed credential verifier: email lookup plus password hash check.
#[derive(Clone)]
pub struct StoreCredentialVerifier {
    users: Arc<RwLock<UserStore>>,
}

impl StoreCredentialVerifier {
    pub fn new(users: Arc<RwLock<UserStore>>) -> Self {
        Self { users }
    }
}

impl CredentialVerifier for StoreCredentialVerifier {
    async fn verify(&self, identifier: &str, secret: &str) -> Result<Principal, AppError> {
        let users = self.users.read().await;
        let user = users
            .find_by_email(identifier)
            .ok_or(AppError::InvalidCredentials)?;

        verify_password(secret, &user.password_hash)?;

        Ok(Principal {
            user_id: user.id,
            email: Some(user.email.clone()),
            authorities: vec![user.role.clone()],
        })
    }
}
