// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Tokengate Contributors

//! Token claims.

use serde::{Deserialize, Serialize};

/// Claims carried inside a signed token.
///
/// `sub` holds the user id as an opaque string; `iat`/`exp` are Unix
/// timestamps with the invariant `exp > iat` for any issued token. `email`
/// and `authorities` are optional; a missing authorities claim is treated as
/// an empty list at conversion time, never as an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user's id, stringified.
    pub sub: String,

    /// Issued-at timestamp (Unix seconds).
    pub iat: i64,

    /// Expiry timestamp (Unix seconds).
    pub exp: i64,

    /// User's email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Granted authorities (role names), in grant order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorities: Option<Vec<String>>,
}
