//! Dining Table Model

use serde::{Deserialize, Serialize};

/// Dining table entity
///
/// The `id` is the stable identifier embedded in the customer-facing QR
/// link; `number` is display-only and may be changed or duplicated freely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiningTable {
    pub id: String,
    pub number: u32,
}

/// Create dining table payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiningTableCreate {
    pub number: u32,
}
