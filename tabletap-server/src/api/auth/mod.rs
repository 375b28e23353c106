//! Auth API module

mod handler;

use axum::{Router, middleware, routing::get, routing::post};

use crate::auth::require_session;
use crate::core::ServerState;

pub fn router(state: ServerState) -> Router<ServerState> {
    Router::new().nest("/api/auth", routes(state))
}

fn routes(state: ServerState) -> Router<ServerState> {
    let public_routes = Router::new()
        .route("/login", post(handler::login))
        .route("/register", post(handler::register));

    let session_routes = Router::new()
        .route("/logout", post(handler::logout))
        .route("/me", get(handler::me))
        .layer(middleware::from_fn_with_state(state, require_session));

    public_routes.merge(session_routes)
}
