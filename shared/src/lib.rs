//! Shared types for TableTap
//!
//! Common types used by the order server and its clients: entity models,
//! the order status state machine, the customer cart, and request/response
//! DTOs for the HTTP API.

pub mod client;
pub mod models;
pub mod order;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

// Order re-exports (for convenient access)
pub use order::{Cart, CartItem, Order, OrderLine, OrderStatus};
