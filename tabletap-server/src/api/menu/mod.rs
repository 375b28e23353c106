//! Menu API module
//!
//! Dashboard menu management. The owner is taken from the session - a
//! dashboard can only ever touch its own collection.

mod handler;

use axum::{Router, middleware, routing::get};

use crate::auth::require_session;
use crate::core::ServerState;

pub fn router(state: ServerState) -> Router<ServerState> {
    Router::new().nest("/api/menu", routes(state))
}

fn routes(state: ServerState) -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route(
            "/{id}",
            axum::routing::put(handler::update).delete(handler::delete),
        )
        .layer(middleware::from_fn_with_state(state, require_session))
}
