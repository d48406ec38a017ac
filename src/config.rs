// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Tokengate Contributors

//! # Runtime Configuration
//!
//! Configuration is loaded from the environment once at startup. Missing or
//! invalid values fail the process before it starts serving; nothing is
//! re-read per request.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `TOKENGATE_SECRET_KEY` | HMAC secret for signing/verifying tokens | Required, non-empty |
//! | `TOKENGATE_TOKEN_DURATION_SECS` | Token validity window in seconds | Required, positive |
//! | `TOKENGATE_ADMIN_EMAIL` | Bootstrap admin account email | Optional |
//! | `TOKENGATE_ADMIN_PASSWORD` | Bootstrap admin account password | Optional |
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8080` |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

use std::env;

use chrono::Duration;

use crate::error::AppError;

/// Environment variable name for the token signing secret.
pub const SECRET_KEY_ENV: &str = "TOKENGATE_SECRET_KEY";

/// Environment variable name for the token validity window, in seconds.
pub const TOKEN_DURATION_ENV: &str = "TOKENGATE_TOKEN_DURATION_SECS";

/// Environment variable names for the optional bootstrap admin account.
pub const ADMIN_EMAIL_ENV: &str = "TOKENGATE_ADMIN_EMAIL";
pub const ADMIN_PASSWORD_ENV: &str = "TOKENGATE_ADMIN_PASSWORD";

/// Environment variable name for the server bind address.
pub const HOST_ENV: &str = "HOST";

/// Environment variable name for the server bind port.
pub const PORT_ENV: &str = "PORT";

/// Environment variable name for the log output format.
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

/// Token signing configuration consumed by the token codec.
#[derive(Debug, Clone)]
pub struct AuthProperties {
    /// Shared secret for the symmetric signing algorithm. Must be non-empty.
    pub secret_key: String,
    /// Validity window applied to issued tokens. Must be positive.
    pub token_duration: Duration,
}

impl AuthProperties {
    /// Load token configuration from the environment, failing fast on
    /// missing or invalid values.
    pub fn from_env() -> Result<Self, AppError> {
        let secret_key = env::var(SECRET_KEY_ENV)
            .map_err(|_| AppError::Configuration(format!("{SECRET_KEY_ENV} is not set")))?;
        if secret_key.is_empty() {
            return Err(AppError::Configuration(format!(
                "{SECRET_KEY_ENV} must not be empty"
            )));
        }

        let raw_duration = env::var(TOKEN_DURATION_ENV)
            .map_err(|_| AppError::Configuration(format!("{TOKEN_DURATION_ENV} is not set")))?;
        let seconds: i64 = raw_duration.parse().map_err(|_| {
            AppError::Configuration(format!(
                "{TOKEN_DURATION_ENV} must be an integer number of seconds, got {raw_duration:?}"
            ))
        })?;
        if seconds <= 0 {
            return Err(AppError::Configuration(format!(
                "{TOKEN_DURATION_ENV} must be positive, got {seconds}"
            )));
        }

        Ok(Self {
            secret_key,
            token_duration: Duration::seconds(seconds),
        })
    }
}

/// Resolve the bind address from `HOST`/`PORT`, with the same defaults the
/// container images use.
pub fn bind_address() -> Result<std::net::SocketAddr, AppError> {
    let host = env::var(HOST_ENV).unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var(PORT_ENV).unwrap_or_else(|_| "8080".to_string());
    format!("{host}:{port}")
        .parse()
        .map_err(|_| AppError::Configuration(format!("invalid bind address {host}:{port}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Environment access is process-wide, so all from_env assertions live in
    // a single test to avoid interleaving with parallel tests.
    #[test]
    fn auth_properties_from_env() {
        env::remove_var(SECRET_KEY_ENV);
        env::remove_var(TOKEN_DURATION_ENV);
        assert!(matches!(
            AuthProperties::from_env(),
            Err(AppError::Configuration(_))
        ));

        env::set_var(SECRET_KEY_ENV, "test-secret");
        env::set_var(TOKEN_DURATION_ENV, "not-a-number");
        assert!(matches!(
            AuthProperties::from_env(),
            Err(AppError::Configuration(_))
        ));

        env::set_var(TOKEN_DURATION_ENV, "-5");
        assert!(matches!(
            AuthProperties::from_env(),
            Err(AppError::Configuration(_))
        ));

        env::set_var(TOKEN_DURATION_ENV, "3600");
        let properties = AuthProperties::from_env().expect("valid configuration");
        assert_eq!(properties.secret_key, "test-secret");
        assert_eq!(properties.token_duration, Duration::seconds(3600));

        env::remove_var(SECRET_KEY_ENV);
        env::remove_var(TOKEN_DURATION_ENV);
    }
}
