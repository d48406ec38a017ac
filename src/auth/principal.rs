// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Tokengate Contributors

//! The authenticated principal and its conversion from verified claims.

use super::claims::Claims;
use crate::error::AppError;

/// Role granted to every registered user.
pub const ROLE_USER: &str = "ROLE_USER";

/// Role required for administrative endpoints.
pub const ROLE_ADMIN: &str = "ROLE_ADMIN";

/// The authenticated identity attached to a call.
///
/// Created from verified claims (or directly by the credential verifier at
/// login) and owned by the call that created it; never persisted. It only
/// travels through the security context, never over the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct Principal {
    /// Numeric user id (the token subject).
    pub user_id: i64,

    /// User's email address.
    pub email: Option<String>,

    /// Granted authorities (role names), in grant order.
    pub authorities: Vec<String>,
}

impl Principal {
    /// Whether this principal carries the given authority.
    pub fn has_authority(&self, authority: &str) -> bool {
        self.authorities.iter().any(|granted| granted == authority)
    }
}

/// Convert verified claims into a [`Principal`].
///
/// Pure: the only failure path is a non-numeric subject. A missing
/// authorities claim becomes an empty list.
pub fn to_principal(claims: &Claims) -> Result<Principal, AppError> {
    let user_id = claims.sub.parse::<i64>().map_err(|_| {
        AppError::MalformedClaims(format!("subject is not a numeric user id: {:?}", claims.sub))
    })?;

    Ok(Principal {
        user_id,
        email: claims.email.clone(),
        authorities: claims.authorities.clone().unwrap_or_default(),
    })
}
