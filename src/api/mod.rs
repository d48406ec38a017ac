// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Tokengate Contributors

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    auth::middleware::authenticate,
    models::{
        CreateOrderRequest, LoginRequest, LoginResponse, OrderResponse, RegisterRequest,
        ResetPasswordRequest, UpdateOrderRequest, UpdateUserRequest, UserResponse,
    },
    state::AppState,
};

pub mod auth;
pub mod health;
pub mod orders;
pub mod users;

/// Build the application router.
///
/// The authentication middleware wraps every route, including public ones:
/// it only installs the principal, it never rejects. Access decisions are
/// made by the gate checks inside the protected handlers.
pub fn router(state: AppState) -> Router {
    let routes = Router::new()
        .route("/health", get(health::health))
        .route("/auth/login", post(auth::login))
        .route("/auth/register", post(auth::register))
        .route("/auth/reset-password", post(auth::reset_password))
        .route(
            "/orders",
            get(orders::list_orders)
                .post(orders::create_order)
                .put(orders::update_order),
        )
        .route(
            "/orders/{order_id}",
            get(orders::get_order).delete(orders::delete_order),
        )
        .route("/users", get(users::list_users))
        .route(
            "/users/{user_id}",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .route("/users/{user_id}/admin", put(users::promote_to_admin))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            authenticate,
        ))
        .with_state(state);

    Router::new()
        .merge(routes)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        auth::login,
        auth::register,
        auth::reset_password,
        orders::list_orders,
        orders::create_order,
        orders::get_order,
        orders::update_order,
        orders::delete_order,
        users::list_users,
        users::get_user,
        users::update_user,
        users::promote_to_admin,
        users::delete_user
    ),
    components(schemas(
        LoginRequest,
        LoginResponse,
        RegisterRequest,
        ResetPasswordRequest,
        CreateOrderRequest,
        UpdateOrderRequest,
        OrderResponse,
        UpdateUserRequest,
        UserResponse
    )),
    tags(
        (name = "Auth", description = "Login, registration, password reset"),
        (name = "Users", description = "User administration (admin role)"),
        (name = "Orders", description = "Order management (authenticated)"),
        (name = "Health", description = "Liveness")
    )
)]
struct ApiDoc;
