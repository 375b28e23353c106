//! Order status state machine

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Order status
///
/// Serialized as the lowercase strings the dashboard and persisted
/// collections use (`"new"`, `"preparing"`, `"ready"`, `"served"`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Just placed by a customer, not yet seen by the kitchen
    #[default]
    New,
    /// Kitchen is working on it
    Preparing,
    /// Ready for pickup / delivery to the table
    Ready,
    /// Delivered; terminal
    Served,
}

/// Rejected status transition
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid status transition: {from} -> {to}")]
pub struct TransitionError {
    pub from: OrderStatus,
    pub to: OrderStatus,
}

impl OrderStatus {
    /// The immediate successor in the lifecycle, or `None` at `Served`.
    pub fn next(self) -> Option<OrderStatus> {
        match self {
            OrderStatus::New => Some(OrderStatus::Preparing),
            OrderStatus::Preparing => Some(OrderStatus::Ready),
            OrderStatus::Ready => Some(OrderStatus::Served),
            OrderStatus::Served => None,
        }
    }

    /// Whether no further transition is possible.
    pub fn is_terminal(self) -> bool {
        self == OrderStatus::Served
    }

    /// Validate a transition to `target`.
    ///
    /// Only the immediate successor is accepted: transitions that skip a
    /// step, repeat the current status, move backwards, or leave `Served`
    /// are all rejected. Disabling out-of-order buttons in a UI is not a
    /// guard; this is.
    pub fn advance_to(self, target: OrderStatus) -> Result<OrderStatus, TransitionError> {
        match self.next() {
            Some(next) if next == target => Ok(target),
            _ => Err(TransitionError {
                from: self,
                to: target,
            }),
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OrderStatus::New => "new",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
            OrderStatus::Served => "served",
        };
        write!(f, "{}", s)
    }
}
