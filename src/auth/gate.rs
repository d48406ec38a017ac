// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Tokengate Contributors

//! Declarative authorization checks over the current security context.
//!
//! The gate is where invalid or absent authentication finally gets rejected:
//! the middleware deliberately lets anonymous calls through, and protected
//! operations call into here before doing any work. Evaluation is
//! synchronous, deterministic, and side-effect-free.

use super::context::SecurityContext;
use super::principal::Principal;
use crate::error::AppError;

/// Require the current principal to satisfy `predicate`.
///
/// No principal → [`AppError::Unauthenticated`] (401). Principal present but
/// predicate false → [`AppError::Forbidden`] (403).
pub fn require<P>(predicate: P) -> Result<Principal, AppError>
where
    P: FnOnce(&Principal) -> bool,
{
    let principal = SecurityContext::current().ok_or(AppError::Unauthenticated)?;
    if predicate(&principal) {
        Ok(principal)
    } else {
        Err(AppError::Forbidden)
    }
}

/// Require any authenticated principal.
pub fn require_authenticated() -> Result<Principal, AppError> {
    require(|_| true)
}

/// Require a principal carrying the given authority.
pub fn require_authority(authority: &str) -> Result<Principal, AppError> {
    require(|principal| principal.has_authority(authority))
}
