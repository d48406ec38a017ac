// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Tokengate Contributors

//! Authentication endpoints: login, registration, password reset.
//!
//! All three are public routes; every service invocation still runs through
//! the interception pipeline so entry/exit logging and failure translation
//! stay uniform.

use axum::{extract::State, Json};

use crate::auth::verifier::{hash_password, verify_password};
use crate::auth::ROLE_USER;
use crate::error::AppError;
use crate::intercept::{intercept, FailureResponse};
use crate::models::{LoginRequest, LoginResponse, RegisterRequest, ResetPasswordRequest};
use crate::state::AppState;

/// Attempt a login and issue a token.
#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    tag = "Auth",
    responses(
        (status = 200, description = "Token issued", body = LoginResponse),
        (status = 401, description = "Invalid credentials"),
    )
)]
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, FailureResponse> {
    let response = intercept(
        "AuthService.attempt_login",
        state.auth.attempt_login(&request.email, &request.password),
    )
    .await?;
    Ok(Json(response))
}

/// Register a new user account with the default user role.
#[utoipa::path(
    post,
    path = "/auth/register",
    request_body = RegisterRequest,
    tag = "Auth",
    responses(
        (status = 200, description = "User registered"),
        (status = 409, description = "Name or email already taken"),
    )
)]
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<String, FailureResponse> {
    intercept("RegistrationService.register_user", async {
        let password_hash = hash_password(&request.password)?;
        let mut users = state.users.write().await;
        users.insert_user(&request.name, &request.email, password_hash, ROLE_USER)?;
        Ok(())
    })
    .await?;

    Ok(format!(
        "User registered successfully for user: {}",
        request.email
    ))
}

/// Reset a user's password after verifying the old one.
#[utoipa::path(
    post,
    path = "/auth/reset-password",
    request_body = ResetPasswordRequest,
    tag = "Auth",
    responses(
        (status = 200, description = "Password reset"),
        (status = 409, description = "Invalid old password or unknown user"),
    )
)]
pub async fn reset_password(
    State(state): State<AppState>,
    Json(request): Json<ResetPasswordRequest>,
) -> Result<String, FailureResponse> {
    intercept("PasswordResetService.reset_password", async {
        let mut users = state.users.write().await;

        let (id, stored_hash) = users
            .find_by_email(&request.email)
            .map(|user| (user.id, user.password_hash.clone()))
            .ok_or_else(|| {
                AppError::InvalidResetToken(
                    "Invalid old password or user not found.".to_string(),
                )
            })?;

        verify_password(&request.old_password, &stored_hash).map_err(|_| {
            AppError::InvalidResetToken("Invalid old password or user not found.".to_string())
        })?;

        let new_hash = hash_password(&request.new_password)?;
        users.set_password_hash(id, new_hash)
    })
    .await?;

    Ok(format!(
        "Password reset successfully for user: {}",
        request.email
    ))
}
