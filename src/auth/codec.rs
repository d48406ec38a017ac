// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Tokengate Contributors

//! Token issuance and verification.
//!
//! Tokens are compact three-segment JWTs signed with HMAC-SHA256 over a
//! shared secret. Verification is all-or-nothing: structural parse, a
//! constant-time signature comparison, then the expiry check, and any failure
//! maps onto the token-layer error taxonomy.

use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};

use super::claims::Claims;
use crate::config::AuthProperties;
use crate::error::AppError;

/// Clock skew tolerance (60 seconds).
const CLOCK_SKEW_LEEWAY: u64 = 60;

/// Identity and claims for a token to be issued.
#[derive(Debug, Clone)]
pub struct IssueRequest {
    pub user_id: i64,
    pub email: Option<String>,
    pub authorities: Vec<String>,
}

/// Issues and verifies signed tokens with a fixed symmetric algorithm.
///
/// Built once at startup from [`AuthProperties`] and safe for concurrent
/// reads; nothing here is mutated after construction.
pub struct TokenCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    token_duration: Duration,
}

impl TokenCodec {
    /// Build a codec from the configured secret and validity duration.
    ///
    /// Fails with a configuration error if the secret is empty or the
    /// duration is not positive; these are startup failures, not per-request
    /// ones.
    pub fn new(properties: &AuthProperties) -> Result<Self, AppError> {
        if properties.secret_key.is_empty() {
            return Err(AppError::Configuration(
                "token secret key must not be empty".to_string(),
            ));
        }
        if properties.token_duration <= Duration::zero() {
            return Err(AppError::Configuration(
                "token duration must be positive".to_string(),
            ));
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = CLOCK_SKEW_LEEWAY;
        validation.validate_aud = false;

        Ok(Self {
            encoding: EncodingKey::from_secret(properties.secret_key.as_bytes()),
            decoding: DecodingKey::from_secret(properties.secret_key.as_bytes()),
            validation,
            token_duration: properties.token_duration,
        })
    }

    /// Issue a token for the given identity, valid from now for the
    /// configured duration.
    pub fn issue(&self, request: &IssueRequest) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: request.user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + self.token_duration).timestamp(),
            email: request.email.clone(),
            authorities: Some(request.authorities.clone()),
        };
        self.encode(&claims)
    }

    /// Sign explicit claims. Issuance primitive; [`TokenCodec::issue`] is the
    /// normal entry point.
    pub fn encode(&self, claims: &Claims) -> Result<String, AppError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding)
            .map_err(|e| AppError::Configuration(format!("failed to sign token: {e}")))
    }

    /// Verify a token and return its claims.
    ///
    /// No partial success: a malformed structure, a signature mismatch, or an
    /// expired token each fail with their own kind and no claims are
    /// returned.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::ExpiredToken,
                jsonwebtoken::errors::ErrorKind::InvalidSignature => AppError::SignatureMismatch,
                _ => AppError::InvalidToken,
            })
    }
}
