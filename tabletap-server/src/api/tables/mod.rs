//! Dining Table API module

mod handler;

use axum::{Router, middleware, routing::get};

use crate::auth::require_session;
use crate::core::ServerState;

pub fn router(state: ServerState) -> Router<ServerState> {
    Router::new().nest("/api/tables", routes(state))
}

fn routes(state: ServerState) -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/{id}", axum::routing::delete(handler::delete))
        .route("/{id}/qr", get(handler::qr))
        .layer(middleware::from_fn_with_state(state, require_session))
}
