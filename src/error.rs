// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Tokengate Contributors

//! Failure taxonomy and the static failure-kind → status classification table.
//!
//! Every failure the service can surface is a variant of [`AppError`]. The
//! interception pipeline translates failures into HTTP responses by looking
//! up the variant's [`FailureKind`] in a classification table that is built
//! once at startup and never mutated afterwards. Kinds without a registered
//! status fall back to 500; the failure message is forwarded either way.

use std::collections::HashMap;
use std::sync::OnceLock;

use axum::http::StatusCode;
use thiserror::Error;

/// Application-wide error type.
///
/// Token-layer failures (`InvalidToken`, `SignatureMismatch`, `ExpiredToken`,
/// `MalformedClaims`) are swallowed by the authentication middleware and
/// normally never reach a response; the remaining variants propagate up to
/// the interception pipeline.
#[derive(Debug, Error)]
pub enum AppError {
    /// Token is structurally malformed (bad segments, bad base64, bad JSON).
    #[error("Token is malformed")]
    InvalidToken,
    /// Token signature does not match the configured secret.
    #[error("Token signature is invalid")]
    SignatureMismatch,
    /// Token is past its expiry.
    #[error("Token has expired")]
    ExpiredToken,
    /// Verified claims could not be converted into a principal.
    #[error("Token claims are malformed: {0}")]
    MalformedClaims(String),
    /// No principal is present on the current call.
    #[error("Full authentication is required to access this resource")]
    Unauthenticated,
    /// A principal is present but lacks the required authority.
    #[error("Access denied: insufficient authorities")]
    Forbidden,
    /// Credential verification failed.
    #[error("Invalid email or password")]
    InvalidCredentials,
    /// An entity with the same unique attribute already exists.
    #[error("{0}")]
    DuplicateEntity(String),
    /// The requested entity does not exist.
    #[error("{0}")]
    NotFound(String),
    /// Password reset was attempted with invalid credentials.
    #[error("{0}")]
    InvalidResetToken(String),
    /// Startup configuration is missing or invalid.
    #[error("{0}")]
    Configuration(String),
}

/// Explicit failure-kind tag, used as the classification table key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    InvalidToken,
    SignatureMismatch,
    ExpiredToken,
    MalformedClaims,
    Unauthenticated,
    Forbidden,
    InvalidCredentials,
    DuplicateEntity,
    NotFound,
    InvalidResetToken,
    Configuration,
}

impl AppError {
    /// The classification tag for this failure.
    pub fn kind(&self) -> FailureKind {
        match self {
            AppError::InvalidToken => FailureKind::InvalidToken,
            AppError::SignatureMismatch => FailureKind::SignatureMismatch,
            AppError::ExpiredToken => FailureKind::ExpiredToken,
            AppError::MalformedClaims(_) => FailureKind::MalformedClaims,
            AppError::Unauthenticated => FailureKind::Unauthenticated,
            AppError::Forbidden => FailureKind::Forbidden,
            AppError::InvalidCredentials => FailureKind::InvalidCredentials,
            AppError::DuplicateEntity(_) => FailureKind::DuplicateEntity,
            AppError::NotFound(_) => FailureKind::NotFound,
            AppError::InvalidResetToken(_) => FailureKind::InvalidResetToken,
            AppError::Configuration(_) => FailureKind::Configuration,
        }
    }
}

static STATUS_BY_KIND: OnceLock<HashMap<FailureKind, StatusCode>> = OnceLock::new();

fn classification_table() -> &'static HashMap<FailureKind, StatusCode> {
    STATUS_BY_KIND.get_or_init(|| {
        HashMap::from([
            (FailureKind::Unauthenticated, StatusCode::UNAUTHORIZED),
            (FailureKind::InvalidCredentials, StatusCode::UNAUTHORIZED),
            (FailureKind::Forbidden, StatusCode::FORBIDDEN),
            (FailureKind::NotFound, StatusCode::NOT_FOUND),
            (FailureKind::DuplicateEntity, StatusCode::CONFLICT),
            (FailureKind::InvalidResetToken, StatusCode::CONFLICT),
        ])
    })
}

/// Force the classification table to be built. Called once at startup so the
/// table is in place before the first request.
pub fn init_classification() {
    let _ = classification_table();
}

/// Look up the HTTP status for a failure kind. Unregistered kinds map to a
/// generic internal-server-error status.
pub fn status_for(kind: FailureKind) -> StatusCode {
    classification_table()
        .get(&kind)
        .copied()
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registered_kinds_map_to_expected_statuses() {
        assert_eq!(status_for(FailureKind::Unauthenticated), StatusCode::UNAUTHORIZED);
        assert_eq!(status_for(FailureKind::InvalidCredentials), StatusCode::UNAUTHORIZED);
        assert_eq!(status_for(FailureKind::Forbidden), StatusCode::FORBIDDEN);
        assert_eq!(status_for(FailureKind::NotFound), StatusCode::NOT_FOUND);
        assert_eq!(status_for(FailureKind::DuplicateEntity), StatusCode::CONFLICT);
        assert_eq!(status_for(FailureKind::InvalidResetToken), StatusCode::CONFLICT);
    }

    #[test]
    fn unregistered_kinds_fall_back_to_internal_error() {
        assert_eq!(status_for(FailureKind::InvalidToken), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(status_for(FailureKind::Configuration), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn kind_matches_variant() {
        assert_eq!(AppError::Unauthenticated.kind(), FailureKind::Unauthenticated);
        assert_eq!(AppError::NotFound("x".into()).kind(), FailureKind::NotFound);
        assert_eq!(
            AppError::DuplicateEntity("dup".into()).kind(),
            FailureKind::DuplicateEntity
        );
    }

    #[test]
    fn messages_are_forwarded_verbatim() {
        let err = AppError::NotFound("Order does not exist. order id: 7".into());
        assert_eq!(err.to_string(), "Order does not exist. order id: 7");
    }
}
