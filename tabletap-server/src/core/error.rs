//! Server-level errors
//!
//! Errors surfaced by startup and the serve loop, as opposed to
//! [`AppError`](crate::utils::AppError) which handlers return per
//! request.

use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

pub type Result<T> = std::result::Result<T, ServerError>;
