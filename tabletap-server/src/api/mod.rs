//! API route modules
//!
//! # Structure
//!
//! - [`health`] - liveness check
//! - [`auth`] - login / register / logout / me
//! - [`menu`] - dashboard menu management
//! - [`tables`] - dashboard table registry and QR payloads
//! - [`orders`] - dashboard order list, status advancement, notifications
//! - [`storefront`] - customer-facing menu snapshot and order submission
//!
//! Dashboard modules are gated by
//! [`require_session`](crate::auth::require_session); the storefront is
//! public and scoped by the restaurant id in its path.

pub mod auth;
pub mod health;
pub mod menu;
pub mod orders;
pub mod storefront;
pub mod tables;

use axum::Router;

use crate::core::ServerState;

/// Assemble the full application router
pub fn router(state: ServerState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(storefront::router())
        .merge(auth::router(state.clone()))
        .merge(menu::router(state.clone()))
        .merge(tables::router(state.clone()))
        .merge(orders::router(state.clone()))
        .with_state(state)
}
