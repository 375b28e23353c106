//! Order domain types
//!
//! The order lifecycle: a customer cart is snapshotted into an [`Order`]
//! at submission time, then staff advance the order's [`OrderStatus`]
//! strictly forward until it is served.

pub mod cart;
pub mod status;
pub mod types;

pub use cart::{Cart, CartItem};
pub use status::{OrderStatus, TransitionError};
pub use types::{Order, OrderLine};
