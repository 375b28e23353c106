//! Order API Handlers

use std::convert::Infallible;

use axum::{
    Extension, Json,
    extract::{Path, State},
    response::sse::{Event, KeepAlive, Sse},
};
use futures::Stream;
use serde::Deserialize;
use tokio::sync::broadcast::error::RecvError;

use crate::auth::CurrentSession;
use crate::core::ServerState;
use crate::orders::OrderNotification;
use crate::store::repository::OrderRepository;
use crate::utils::AppResult;
use shared::order::{Order, OrderStatus};

/// GET /api/orders - all of the owner's orders, oldest first
pub async fn list(
    State(state): State<ServerState>,
    Extension(CurrentSession(session)): Extension<CurrentSession>,
) -> AppResult<Json<Vec<Order>>> {
    let repo = OrderRepository::new(state.store.clone());
    Ok(Json(repo.find_all(&session.id)?))
}

/// GET /api/orders/new - orders still waiting for the kitchen
pub async fn list_new(
    State(state): State<ServerState>,
    Extension(CurrentSession(session)): Extension<CurrentSession>,
) -> AppResult<Json<Vec<Order>>> {
    let repo = OrderRepository::new(state.store.clone());
    Ok(Json(repo.find_new(&session.id)?))
}

/// Status advancement request
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: OrderStatus,
}

/// POST /api/orders/:id/status - advance one step
pub async fn advance(
    State(state): State<ServerState>,
    Extension(CurrentSession(session)): Extension<CurrentSession>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateStatusRequest>,
) -> AppResult<Json<Order>> {
    let repo = OrderRepository::new(state.store.clone());
    let order = repo.advance(&session.id, &id, payload.status)?;
    tracing::info!(owner = %session.id, order = %order.id, status = %order.status, "Order advanced");
    Ok(Json(order))
}

/// GET /api/orders/notifications - SSE stream of order notifications
///
/// Subscribes the dashboard to the broadcast channel, filtered to the
/// session's own restaurant. Notifications published while nobody is
/// connected are lost - there is no delivery guarantee.
pub async fn notifications(
    State(state): State<ServerState>,
    Extension(CurrentSession(session)): Extension<CurrentSession>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let rx = state.notifier.subscribe();
    let owner = session.id;

    let stream = futures::stream::unfold((rx, owner), |(mut rx, owner)| async move {
        loop {
            match rx.recv().await {
                Ok(notification) if notification.restaurant_id() == owner => {
                    let event = to_sse_event(&notification);
                    return Some((Ok(event), (rx, owner)));
                }
                // Someone else's restaurant
                Ok(_) => continue,
                // Dropped notifications are acceptable; keep listening
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(owner = %owner, skipped, "Notification stream lagged");
                    continue;
                }
                Err(RecvError::Closed) => return None,
            }
        }
    });

    Sse::new(stream).keep_alive(KeepAlive::default())
}

fn to_sse_event(notification: &OrderNotification) -> Event {
    Event::default()
        .event("order")
        .json_data(notification)
        .unwrap_or_else(|e| {
            tracing::error!(error = %e, "Failed to encode notification");
            Event::default().event("order")
        })
}
