//! Session middleware
//!
//! Gates dashboard routes on a valid bearer token.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::auth::{CurrentSession, SessionToken};
use crate::core::ServerState;
use crate::utils::AppError;

/// Require a live session.
///
/// Extracts `Authorization: Bearer <token>`, resolves it against the
/// session registry, and injects [`CurrentSession`] and [`SessionToken`]
/// into request extensions. Customer-facing routes never pass through
/// this middleware - only the dashboard surface is gated.
pub async fn require_session(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = match auth_header.and_then(extract_bearer) {
        Some(token) => token.to_string(),
        None => {
            tracing::warn!(uri = %req.uri(), "Missing session token");
            return Err(AppError::Unauthorized);
        }
    };

    match state.sessions.get(&token) {
        Some(session) => {
            req.extensions_mut().insert(CurrentSession(session));
            req.extensions_mut().insert(SessionToken(token));
            Ok(next.run(req).await)
        }
        None => Err(AppError::InvalidToken),
    }
}

fn extract_bearer(header: &str) -> Option<&str> {
    header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_bearer_token() {
        assert_eq!(extract_bearer("Bearer abc123"), Some("abc123"));
        assert_eq!(extract_bearer("Basic abc123"), None);
        assert_eq!(extract_bearer("Bearer "), None);
    }
}
