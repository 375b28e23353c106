//! Session Model

use serde::{Deserialize, Serialize};

/// Fabricated identity for a logged-in restaurant owner.
///
/// Not a security boundary: there is no credential verification behind a
/// session. The `id` doubles as the owner id that scopes every persisted
/// collection (menu items, tables, orders).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub email: String,
    pub name: String,
}
