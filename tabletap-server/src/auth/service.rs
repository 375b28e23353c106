//! Session service
//!
//! Process-local session registry. Sessions live in a `DashMap` keyed by
//! a random bearer token and die with the process - nothing about an
//! identity is worth persisting when any email can mint a fresh one.

use std::sync::Arc;

use dashmap::DashMap;
use sha2::{Digest, Sha256};
use uuid::Uuid;

use shared::models::Session;

/// Owner ids are this many hex chars of `SHA-256(email)`
const OWNER_ID_LEN: usize = 16;

/// Current session, injected into request extensions by
/// [`require_session`](super::middleware::require_session)
#[derive(Debug, Clone)]
pub struct CurrentSession(pub Session);

/// Raw bearer token of the current request, injected alongside
/// [`CurrentSession`] so logout can revoke itself
#[derive(Debug, Clone)]
pub struct SessionToken(pub String);

/// Session registry
#[derive(Clone, Default)]
pub struct SessionService {
    sessions: Arc<DashMap<String, Session>>,
}

impl SessionService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive the owner (restaurant) id for an email.
    ///
    /// Deterministic so repeated logins address the same restaurant's
    /// collections, and so QR links stay valid across sessions.
    pub fn owner_id(email: &str) -> String {
        let digest = Sha256::digest(email.trim().to_lowercase().as_bytes());
        hex::encode(digest)[..OWNER_ID_LEN].to_string()
    }

    /// Mint a session for `email`. No credential verification.
    pub fn issue(&self, email: &str, name: &str) -> (String, Session) {
        let session = Session {
            id: Self::owner_id(email),
            email: email.trim().to_string(),
            name: name.to_string(),
        };
        let token = Uuid::new_v4().simple().to_string();
        self.sessions.insert(token.clone(), session.clone());
        (token, session)
    }

    /// Look up the session behind a bearer token
    pub fn get(&self, token: &str) -> Option<Session> {
        self.sessions.get(token).map(|entry| entry.clone())
    }

    /// Drop a token; returns whether it existed
    pub fn revoke(&self, token: &str) -> bool {
        self.sessions.remove(token).is_some()
    }

    /// Distinct owner ids with at least one live session.
    ///
    /// These are the dashboards the polling fallback watches on behalf
    /// of - owners nobody is logged in as have nobody to notify.
    pub fn active_owners(&self) -> Vec<String> {
        let mut owners: Vec<String> = self
            .sessions
            .iter()
            .map(|entry| entry.value().id.clone())
            .collect();
        owners.sort();
        owners.dedup();
        owners
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_id_is_stable_and_case_insensitive() {
        let a = SessionService::owner_id("owner@example.com");
        let b = SessionService::owner_id("Owner@Example.com ");
        assert_eq!(a, b);
        assert_eq!(a.len(), OWNER_ID_LEN);
    }

    #[test]
    fn distinct_emails_get_distinct_owners() {
        assert_ne!(
            SessionService::owner_id("a@example.com"),
            SessionService::owner_id("b@example.com")
        );
    }

    #[test]
    fn issue_get_revoke_round_trip() {
        let service = SessionService::new();
        let (token, session) = service.issue("owner@example.com", "Restaurant Owner");

        assert_eq!(service.get(&token), Some(session));
        assert!(service.revoke(&token));
        assert_eq!(service.get(&token), None);
        assert!(!service.revoke(&token));
    }

    #[test]
    fn active_owners_dedupes_parallel_logins() {
        let service = SessionService::new();
        service.issue("owner@example.com", "A");
        service.issue("owner@example.com", "B");
        service.issue("other@example.com", "C");

        assert_eq!(service.active_owners().len(), 2);
    }
}
