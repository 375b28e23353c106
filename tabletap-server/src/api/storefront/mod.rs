//! Storefront API module
//!
//! The customer-facing surface behind the QR link. No session: anyone
//! holding `/menu/{restaurant_id}?table={table_id}` can read the menu
//! and submit an order for that table.

mod handler;

use axum::{Router, routing::get, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/storefront/{restaurant_id}", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/menu", get(handler::menu))
        .route("/orders", post(handler::place_order))
}
