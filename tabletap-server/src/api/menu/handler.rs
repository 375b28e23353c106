//! Menu API Handlers

use axum::{
    Extension, Json,
    extract::{Path, State},
};

use crate::auth::CurrentSession;
use crate::core::ServerState;
use crate::store::repository::MenuItemRepository;
use crate::utils::AppResult;
use shared::models::{MenuItem, MenuItemCreate, MenuItemUpdate};

/// GET /api/menu - the owner's menu
pub async fn list(
    State(state): State<ServerState>,
    Extension(CurrentSession(session)): Extension<CurrentSession>,
) -> AppResult<Json<Vec<MenuItem>>> {
    let repo = MenuItemRepository::new(state.store.clone());
    Ok(Json(repo.find_all(&session.id)?))
}

/// POST /api/menu - add a menu item
pub async fn create(
    State(state): State<ServerState>,
    Extension(CurrentSession(session)): Extension<CurrentSession>,
    Json(payload): Json<MenuItemCreate>,
) -> AppResult<Json<MenuItem>> {
    let repo = MenuItemRepository::new(state.store.clone());
    let item = repo.create(&session.id, payload)?;
    tracing::info!(owner = %session.id, item = %item.id, "Menu item created");
    Ok(Json(item))
}

/// PUT /api/menu/:id - update a menu item
pub async fn update(
    State(state): State<ServerState>,
    Extension(CurrentSession(session)): Extension<CurrentSession>,
    Path(id): Path<String>,
    Json(payload): Json<MenuItemUpdate>,
) -> AppResult<Json<MenuItem>> {
    let repo = MenuItemRepository::new(state.store.clone());
    let item = repo.update(&session.id, &id, payload)?;
    Ok(Json(item))
}

/// DELETE /api/menu/:id - remove a menu item
pub async fn delete(
    State(state): State<ServerState>,
    Extension(CurrentSession(session)): Extension<CurrentSession>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = MenuItemRepository::new(state.store.clone());
    Ok(Json(repo.delete(&session.id, &id)?))
}
