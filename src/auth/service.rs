// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Tokengate Contributors

//! Login orchestration.

use std::sync::Arc;

use super::codec::{IssueRequest, TokenCodec};
use super::verifier::CredentialVerifier;
use crate::error::AppError;
use crate::models::LoginResponse;

/// Composes the credential verifier and the token codec into "attempt
/// login". Failures from the verifier propagate unchanged; no new error kind
/// is introduced here.
pub struct AuthService<V> {
    codec: Arc<TokenCodec>,
    verifier: V,
}

impl<V: CredentialVerifier> AuthService<V> {
    pub fn new(codec: Arc<TokenCodec>, verifier: V) -> Self {
        Self { codec, verifier }
    }

    /// Verify the credentials and issue a token for the resulting principal.
    /// The response echoes the encoded email and authorities for client
    /// convenience.
    pub async fn attempt_login(
        &self,
        identifier: &str,
        secret: &str,
    ) -> Result<LoginResponse, AppError> {
        let principal = self.verifier.verify(identifier, secret).await?;

        let token = self.codec.issue(&IssueRequest {
            user_id: principal.user_id,
            email: principal.email.clone(),
            authorities: principal.authorities.clone(),
        })?;

        Ok(LoginResponse {
            token,
            email: principal.email,
            authorities: principal.authorities,
        })
    }
}
