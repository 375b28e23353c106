//! Dining Table API Handlers

use axum::{
    Extension, Json,
    extract::{Path, State},
};

use crate::auth::CurrentSession;
use crate::core::ServerState;
use crate::store::repository::DiningTableRepository;
use crate::utils::{AppError, AppResult};
use shared::client::TableQrResponse;
use shared::models::{DiningTable, DiningTableCreate};

/// GET /api/tables - the owner's tables
pub async fn list(
    State(state): State<ServerState>,
    Extension(CurrentSession(session)): Extension<CurrentSession>,
) -> AppResult<Json<Vec<DiningTable>>> {
    let repo = DiningTableRepository::new(state.store.clone());
    Ok(Json(repo.find_all(&session.id)?))
}

/// POST /api/tables - register a table
pub async fn create(
    State(state): State<ServerState>,
    Extension(CurrentSession(session)): Extension<CurrentSession>,
    Json(payload): Json<DiningTableCreate>,
) -> AppResult<Json<DiningTable>> {
    let repo = DiningTableRepository::new(state.store.clone());
    let table = repo.create(&session.id, payload)?;
    tracing::info!(owner = %session.id, table = %table.id, number = table.number, "Table registered");
    Ok(Json(table))
}

/// DELETE /api/tables/:id - remove a table
pub async fn delete(
    State(state): State<ServerState>,
    Extension(CurrentSession(session)): Extension<CurrentSession>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = DiningTableRepository::new(state.store.clone());
    Ok(Json(repo.delete(&session.id, &id)?))
}

/// GET /api/tables/:id/qr - the customer-facing QR payload
///
/// The URL addresses the table by id, so renumbering a table never
/// invalidates printed codes.
pub async fn qr(
    State(state): State<ServerState>,
    Extension(CurrentSession(session)): Extension<CurrentSession>,
    Path(id): Path<String>,
) -> AppResult<Json<TableQrResponse>> {
    let repo = DiningTableRepository::new(state.store.clone());
    let table = repo
        .find_by_id(&session.id, &id)?
        .ok_or_else(|| AppError::not_found(format!("Table {} not found", id)))?;

    let url = format!(
        "{}/menu/{}?table={}",
        state.config.public_origin.trim_end_matches('/'),
        session.id,
        table.id
    );
    Ok(Json(TableQrResponse { table, url }))
}
