//! Order notification
//!
//! Two delivery modes feed the same broadcast channel:
//!
//! - [`OrderNotifier`] - order creation publishes immediately (the
//!   primary pub/sub path).
//! - [`OrderWatcher`] - a periodic fallback that re-reads the order
//!   collections and announces orders still `new`, for consumers that
//!   want the coarse 10-second polling cadence instead of per-order
//!   events.
//!
//! Neither mode guarantees delivery: notifications published before the
//! first subscriber attaches are lost.

pub mod notify;
pub mod watcher;

pub use notify::{OrderNotification, OrderNotifier};
pub use watcher::OrderWatcher;
