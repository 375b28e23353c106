//! Client-related types shared between server and client
//!
//! Common request/response types used in API communication.

use serde::{Deserialize, Serialize};

use crate::models::{DiningTable, Session};
use crate::order::CartItem;

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Login request
///
/// The password is accepted and ignored - sessions are fabricated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Register request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

/// Login/register response data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Bearer token for dashboard routes
    pub token: String,
    pub session: Session,
}

// =============================================================================
// Order API DTOs
// =============================================================================

/// Order submission from the customer menu
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceOrderRequest {
    /// Table id from the QR link's `table` query parameter
    pub table: String,
    /// Drained cart lines
    pub items: Vec<CartItem>,
}

/// Order submission response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceOrderResponse {
    pub order_id: String,
}

// =============================================================================
// Table API DTOs
// =============================================================================

/// QR payload for one table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableQrResponse {
    pub table: DiningTable,
    /// Absolute customer-facing URL encoded into the QR code
    pub url: String,
}
