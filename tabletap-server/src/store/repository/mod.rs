//! Repository Module
//!
//! CRUD operations over the per-owner JSON collections in [`KvStore`].
//! Every mutation follows the same explicit contract: read the full
//! collection, mutate it in memory, write the full collection back.

pub mod dining_table;
pub mod menu_item;
pub mod order;

// Re-exports
pub use dining_table::DiningTableRepository;
pub use menu_item::MenuItemRepository;
pub use order::OrderRepository;

use thiserror::Error;

use crate::store::StoreError;
use shared::order::TransitionError;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Transition(#[from] TransitionError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
