//! Order routes

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::services::OrderService;
use crate::state::AppState;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use storefront_shared::models::Order;
use storefront_shared::types::{CreateOrderRequest, MessageResponse};

/// Create order routes
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/create-order", post(create_order))
        .route("/my-orders", get(my_orders))
}

/// Create an order for the caller
///
/// POST /create-order (requires Bearer token)
async fn create_order(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(req): Json<CreateOrderRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let response = OrderService::create_order(&state.db, &auth_user, req.items).await?;
    Ok(Json(response))
}

/// List the caller's orders, newest first
///
/// GET /my-orders (requires Bearer token)
async fn my_orders(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> ApiResult<Json<Vec<Order>>> {
    let orders = OrderService::list_orders(&state.db, &auth_user).await?;
    Ok(Json(orders))
}
