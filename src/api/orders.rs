// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Tokengate Contributors

//! Order endpoints. Any authenticated principal may use them.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::auth::gate;
use crate::intercept::{intercept, FailureResponse};
use crate::models::{CreateOrderRequest, OrderResponse, UpdateOrderRequest};
use crate::state::AppState;

/// List all orders.
#[utoipa::path(
    get,
    path = "/orders",
    tag = "Orders",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "All orders", body = [OrderResponse]),
        (status = 401, description = "Not authenticated"),
    )
)]
pub async fn list_orders(
    State(state): State<AppState>,
) -> Result<Json<Vec<OrderResponse>>, FailureResponse> {
    gate::require_authenticated()?;
    let orders = intercept("OrderService.get_all_orders", async {
        let orders = state.orders.read().await;
        Ok(orders.list().into_iter().map(OrderResponse::from).collect())
    })
    .await?;
    Ok(Json(orders))
}

/// Create an order.
#[utoipa::path(
    post,
    path = "/orders",
    request_body = CreateOrderRequest,
    tag = "Orders",
    security(("bearer" = [])),
    responses(
        (status = 201, description = "Created order", body = OrderResponse),
        (status = 401, description = "Not authenticated"),
    )
)]
pub async fn create_order(
    State(state): State<AppState>,
    Json(request): Json<CreateOrderRequest>,
) -> Result<(StatusCode, Json<OrderResponse>), FailureResponse> {
    gate::require_authenticated()?;
    let order = intercept("OrderService.save_order", async {
        let mut orders = state.orders.write().await;
        Ok(orders.create(request))
    })
    .await?;
    Ok((StatusCode::CREATED, Json(order.into())))
}

/// Fetch one order by id.
#[utoipa::path(
    get,
    path = "/orders/{order_id}",
    params(("order_id" = String, Path, description = "Order id")),
    tag = "Orders",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "The order", body = OrderResponse),
        (status = 404, description = "No such order"),
    )
)]
pub async fn get_order(
    Path(order_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<OrderResponse>, FailureResponse> {
    gate::require_authenticated()?;
    let order = intercept("OrderService.get_order_by_id", async {
        let orders = state.orders.read().await;
        orders.get(&order_id)
    })
    .await?;
    Ok(Json(order.into()))
}

/// Update an existing order.
#[utoipa::path(
    put,
    path = "/orders",
    request_body = UpdateOrderRequest,
    tag = "Orders",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Updated order", body = OrderResponse),
        (status = 404, description = "No such order"),
    )
)]
pub async fn update_order(
    State(state): State<AppState>,
    Json(request): Json<UpdateOrderRequest>,
) -> Result<Json<OrderResponse>, FailureResponse> {
    gate::require_authenticated()?;
    let order = intercept("OrderService.update_order", async {
        let mut orders = state.orders.write().await;
        orders.update(request)
    })
    .await?;
    Ok(Json(order.into()))
}

/// Delete an order.
#[utoipa::path(
    delete,
    path = "/orders/{order_id}",
    params(("order_id" = String, Path, description = "Order id")),
    tag = "Orders",
    security(("bearer" = [])),
    responses(
        (status = 204, description = "Order deleted"),
        (status = 404, description = "No such order"),
    )
)]
pub async fn delete_order(
    Path(order_id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, FailureResponse> {
    gate::require_authenticated()?;
    intercept("OrderService.delete_order_by_id", async {
        let mut orders = state.orders.write().await;
        orders.delete(&order_id)
    })
    .await?;
    Ok(StatusCode::NO_CONTENT)
}
