//! Storefront API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::orders::OrderNotification;
use crate::store::repository::{MenuItemRepository, OrderRepository};
use crate::utils::AppResult;
use shared::client::{PlaceOrderRequest, PlaceOrderResponse};
use shared::models::MenuItem;

/// GET /api/storefront/:restaurant_id/menu - the menu a customer sees
///
/// An unknown restaurant id renders as an empty menu: absent
/// collections read as empty, never as errors.
pub async fn menu(
    State(state): State<ServerState>,
    Path(restaurant_id): Path<String>,
) -> AppResult<Json<Vec<MenuItem>>> {
    let repo = MenuItemRepository::new(state.store.clone());
    Ok(Json(repo.find_all(&restaurant_id)?))
}

/// POST /api/storefront/:restaurant_id/orders - submit a cart
pub async fn place_order(
    State(state): State<ServerState>,
    Path(restaurant_id): Path<String>,
    Json(req): Json<PlaceOrderRequest>,
) -> AppResult<Json<PlaceOrderResponse>> {
    let repo = OrderRepository::new(state.store.clone());
    let order = repo.create(&restaurant_id, &req.table, req.items)?;

    tracing::info!(
        owner = %restaurant_id,
        order = %order.id,
        table = %order.table_id,
        "Order placed"
    );
    state.notifier.publish(OrderNotification::OrderPlaced {
        restaurant_id,
        order_id: order.id.clone(),
        table_id: order.table_id.clone(),
    });

    Ok(Json(PlaceOrderResponse { order_id: order.id }))
}
