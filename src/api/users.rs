// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Tokengate Contributors

//! User administration endpoints. Every route requires the admin role.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::auth::{gate, ROLE_ADMIN};
use crate::intercept::{intercept, FailureResponse};
use crate::models::{UpdateUserRequest, UserResponse};
use crate::state::AppState;

/// List all users.
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "All users", body = [UserResponse]),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Admin role required"),
    )
)]
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, FailureResponse> {
    gate::require_authority(ROLE_ADMIN)?;
    let users = intercept("UserService.get_all_users", async {
        let users = state.users.read().await;
        Ok(users.list().into_iter().map(UserResponse::from).collect())
    })
    .await?;
    Ok(Json(users))
}

/// Fetch one user by id.
#[utoipa::path(
    get,
    path = "/users/{user_id}",
    params(("user_id" = i64, Path, description = "User id")),
    tag = "Users",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "The user", body = UserResponse),
        (status = 404, description = "No such user"),
    )
)]
pub async fn get_user(
    Path(user_id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<UserResponse>, FailureResponse> {
    gate::require_authority(ROLE_ADMIN)?;
    let user = intercept("UserService.get_user_by_id", async {
        let users = state.users.read().await;
        users.get(user_id).cloned()
    })
    .await?;
    Ok(Json(user.into()))
}

/// Update a user's name and email.
#[utoipa::path(
    put,
    path = "/users/{user_id}",
    params(("user_id" = i64, Path, description = "User id")),
    request_body = UpdateUserRequest,
    tag = "Users",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Updated user", body = UserResponse),
        (status = 404, description = "No such user"),
        (status = 409, description = "Name or email already taken"),
    )
)]
pub async fn update_user(
    Path(user_id): Path<i64>,
    State(state): State<AppState>,
    Json(request): Json<UpdateUserRequest>,
) -> Result<Json<UserResponse>, FailureResponse> {
    gate::require_authority(ROLE_ADMIN)?;
    let user = intercept("UserService.update_user", async {
        let mut users = state.users.write().await;
        users.update_user(user_id, &request.name, &request.email)
    })
    .await?;
    Ok(Json(user.into()))
}

/// Grant the admin role to a user.
#[utoipa::path(
    put,
    path = "/users/{user_id}/admin",
    params(("user_id" = i64, Path, description = "User id")),
    tag = "Users",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Promoted user", body = UserResponse),
        (status = 404, description = "No such user"),
    )
)]
pub async fn promote_to_admin(
    Path(user_id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<UserResponse>, FailureResponse> {
    gate::require_authority(ROLE_ADMIN)?;
    let user = intercept("UserService.update_user_to_admin", async {
        let mut users = state.users.write().await;
        users.promote_to_admin(user_id)
    })
    .await?;
    Ok(Json(user.into()))
}

/// Delete a user, returning the removed record.
#[utoipa::path(
    delete,
    path = "/users/{user_id}",
    params(("user_id" = i64, Path, description = "User id")),
    tag = "Users",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Deleted user", body = UserResponse),
        (status = 404, description = "No such user"),
    )
)]
pub async fn delete_user(
    Path(user_id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<UserResponse>, FailureResponse> {
    gate::require_authority(ROLE_ADMIN)?;
    let user = intercept("UserService.delete_user", async {
        let mut users = state.users.write().await;
        users.delete(user_id)
    })
    .await?;
    Ok(Json(user.into()))
}
