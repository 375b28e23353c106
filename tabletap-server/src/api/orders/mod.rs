//! Order API module
//!
//! Dashboard-side order surface: listing, one-step status advancement,
//! and the notification stream. Order *creation* lives on the public
//! storefront - staff never place orders here.

mod handler;

use axum::{Router, middleware, routing::get, routing::post};

use crate::auth::require_session;
use crate::core::ServerState;

pub fn router(state: ServerState) -> Router<ServerState> {
    Router::new().nest("/api/orders", routes(state))
}

fn routes(state: ServerState) -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list))
        .route("/new", get(handler::list_new))
        .route("/{id}/status", post(handler::advance))
        .route("/notifications", get(handler::notifications))
        .layer(middleware::from_fn_with_state(state, require_session))
}
