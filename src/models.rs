// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Tokengate Contributors

//! Request and response bodies for the HTTP surface.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::store::{Order, User};

/// Body for `POST /auth/login`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login: the issued token plus its encoded claims, echoed for
/// client convenience.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub authorities: Vec<String>,
}

/// Body for `POST /auth/register`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Body for `POST /auth/reset-password`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ResetPasswordRequest {
    pub email: String,
    pub old_password: String,
    pub new_password: String,
}

/// A user as exposed over the API. The password hash never leaves the store.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
        }
    }
}

/// Body for `PUT /users/{user_id}`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    pub name: String,
    pub email: String,
}

/// Body for `POST /orders`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateOrderRequest {
    pub title: String,
    pub description: String,
}

/// Body for `PUT /orders`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateOrderRequest {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub status: Option<String>,
}

/// An order as exposed over the API.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OrderResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            title: order.title,
            description: order.description,
            status: order.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_response_drops_the_password_hash() {
        let user = User {
            id: 1,
            name: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: "hash".to_string(),
            role: "ROLE_USER".to_string(),
        };
        let response = UserResponse::from(user);
        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("hash"));
        assert!(json.contains("alice@example.com"));
    }

    #[test]
    fn login_response_omits_absent_email() {
        let response = LoginResponse {
            token: "t".to_string(),
            email: None,
            authorities: vec![],
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("email"));
    }
}
