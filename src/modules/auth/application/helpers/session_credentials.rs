use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, warn};

use crate::auth::application::domain::entities::{
    AuthUser, Credential, SessionId, AUTH_TOKEN_KEY, AUTH_USER_KEY,
};
use crate::auth::application::ports::outgoing::SessionStore;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SessionError {
    #[error("Please login")]
    NotLoggedIn,

    #[error("Stored session is unreadable: {0}")]
    Corrupt(String),
}

/// Turns a session id into the `Credential` authenticated operations need.
#[derive(Clone)]
pub struct SessionCredentials {
    sessions: Arc<dyn SessionStore + Send + Sync>,
}

impl SessionCredentials {
    pub fn new(sessions: Arc<dyn SessionStore + Send + Sync>) -> Self {
        Self { sessions }
    }

    pub fn resolve(&self, session: &SessionId) -> Result<Credential, SessionError> {
        let token = self
            .sessions
            .get(session, AUTH_TOKEN_KEY)
            .filter(|t| !t.is_empty())
            .ok_or(SessionError::NotLoggedIn)?;

        let raw_user = self
            .sessions
            .get(session, AUTH_USER_KEY)
            .ok_or(SessionError::NotLoggedIn)?;

        let user: AuthUser = serde_json::from_str(&raw_user).map_err(|e| {
            warn!("Session {} holds an unreadable user: {}", session, e);
            SessionError::Corrupt(e.to_string())
        })?;

        if is_past_expiry(&user, Utc::now().timestamp()) {
            debug!("Session {} holds an expired token", session);
            self.sessions.remove_session(session);
            return Err(SessionError::NotLoggedIn);
        }

        Ok(Credential::new(token, user))
    }
}

/// True once the token's `exp` claim (seconds since the epoch) has passed.
/// Tokens without `exp` never expire here.
fn is_past_expiry(user: &AuthUser, now: i64) -> bool {
    user.claims
        .get("exp")
        .and_then(|exp| exp.as_i64())
        .is_some_and(|exp| exp <= now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::adapter::outgoing::in_memory_session_store::InMemorySessionStore;

    fn resolver_with(store: &InMemorySessionStore) -> SessionCredentials {
        SessionCredentials::new(Arc::new(store.clone()))
    }

    #[test]
    fn test_resolves_token_and_user() {
        let store = InMemorySessionStore::new();
        let session = SessionId::from("s1");
        store.put(&session, AUTH_TOKEN_KEY, "jwt".to_string());
        store.put(&session, AUTH_USER_KEY, r#"{"id":"u1","role":"admin"}"#.to_string());

        let credential = resolver_with(&store).resolve(&session).unwrap();

        assert_eq!(credential.token(), "jwt");
        assert_eq!(credential.user_id(), "u1");
    }

    #[test]
    fn test_missing_keys_mean_not_logged_in() {
        let store = InMemorySessionStore::new();
        let session = SessionId::from("s1");
        let resolver = resolver_with(&store);

        assert_eq!(resolver.resolve(&session), Err(SessionError::NotLoggedIn));

        store.put(&session, AUTH_TOKEN_KEY, "jwt".to_string());
        assert_eq!(resolver.resolve(&session), Err(SessionError::NotLoggedIn));
    }

    #[test]
    fn test_expired_token_is_rejected_and_session_dropped() {
        let store = InMemorySessionStore::new();
        let session = SessionId::from("s1");
        store.put(&session, AUTH_TOKEN_KEY, "jwt".to_string());
        store.put(
            &session,
            AUTH_USER_KEY,
            r#"{"id":"u1","exp":1700000000}"#.to_string(),
        );

        assert_eq!(
            resolver_with(&store).resolve(&session),
            Err(SessionError::NotLoggedIn)
        );
        assert_eq!(store.session_count(), 0);
    }

    #[test]
    fn test_token_expiry_boundary() {
        let user: AuthUser =
            serde_json::from_str(r#"{"id":"u1","exp":100}"#).unwrap();
        assert!(!is_past_expiry(&user, 99));
        assert!(is_past_expiry(&user, 100));

        let no_exp: AuthUser = serde_json::from_str(r#"{"id":"u1"}"#).unwrap();
        assert!(!is_past_expiry(&no_exp, i64::MAX));
    }

    #[test]
    fn test_unreadable_user_is_corrupt() {
        let store = InMemorySessionStore::new();
        let session = SessionId::from("s1");
        store.put(&session, AUTH_TOKEN_KEY, "jwt".to_string());
        store.put(&session, AUTH_USER_KEY, "not json".to_string());

        assert!(matches!(
            resolver_with(&store).resolve(&session),
            Err(SessionError::Corrupt(_))
        ));
    }
}
