//! Auth API Handlers
//!
//! Fabricated sessions: any email/password pair is accepted. The fixed
//! delay stands in for an upstream auth round-trip that does not exist.

use std::time::Duration;

use axum::{Extension, Json, extract::State};

use crate::auth::{CurrentSession, SessionToken};
use crate::core::ServerState;
use crate::utils::{AppError, AppResult};
use shared::client::{LoginRequest, LoginResponse, RegisterRequest};
use shared::models::Session;

/// Display name used when logging in without a prior registration
const DEFAULT_OWNER_NAME: &str = "Restaurant Owner";

/// POST /api/auth/login
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    if req.email.trim().is_empty() {
        return Err(AppError::validation("Email is required"));
    }

    simulate_auth_latency(&state).await;

    let (token, session) = state.sessions.issue(&req.email, DEFAULT_OWNER_NAME);
    tracing::info!(owner = %session.id, "Owner logged in");
    Ok(Json(LoginResponse { token, session }))
}

/// POST /api/auth/register
pub async fn register(
    State(state): State<ServerState>,
    Json(req): Json<RegisterRequest>,
) -> AppResult<Json<LoginResponse>> {
    if req.email.trim().is_empty() {
        return Err(AppError::validation("Email is required"));
    }
    if req.name.trim().is_empty() {
        return Err(AppError::validation("Name is required"));
    }

    simulate_auth_latency(&state).await;

    let (token, session) = state.sessions.issue(&req.email, req.name.trim());
    tracing::info!(owner = %session.id, "Owner registered");
    Ok(Json(LoginResponse { token, session }))
}

/// POST /api/auth/logout
pub async fn logout(
    State(state): State<ServerState>,
    Extension(SessionToken(token)): Extension<SessionToken>,
) -> Json<bool> {
    Json(state.sessions.revoke(&token))
}

/// GET /api/auth/me
pub async fn me(Extension(CurrentSession(session)): Extension<CurrentSession>) -> Json<Session> {
    Json(session)
}

async fn simulate_auth_latency(state: &ServerState) {
    tokio::time::sleep(Duration::from_millis(state.config.auth_delay_ms)).await;
}
