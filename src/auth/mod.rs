// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Tokengate Contributors

//! # Authentication & Authorization
//!
//! Stateless token-based authentication:
//!
//! 1. A client logs in with credentials; the [`service::AuthService`]
//!    verifies them through the [`verifier::CredentialVerifier`] boundary and
//!    issues a signed token via the [`codec::TokenCodec`].
//! 2. Subsequent requests carry `Authorization: Bearer <token>`. The
//!    [`middleware::authenticate`] layer verifies the token, converts its
//!    claims into a [`principal::Principal`], and scopes it into the
//!    call-local [`context::SecurityContext`].
//! 3. Protected operations call [`gate`] checks; anonymous calls get 401,
//!    insufficient authorities get 403.
//!
//! The middleware never rejects a request itself — unverifiable tokens
//! collapse to an anonymous call and the gate makes the access decision.

pub mod claims;
pub mod codec;
pub mod context;
pub mod gate;
pub mod middleware;
pub mod principal;
pub mod service;
pub mod verifier;

pub use claims::Claims;
pub use codec::{IssueRequest, TokenCodec};
pub use context::SecurityContext;
pub use principal::{to_principal, Principal, ROLE_ADMIN, ROLE_USER};
pub use service::AuthService;
pub use verifier::{CredentialVerifier, StoreCredentialVerifier};
