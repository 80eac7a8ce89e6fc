use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::auth::application::domain::entities::{AuthChange, SessionId};
use crate::auth::application::ports::outgoing::SessionStore;
use crate::auth::application::services::AuthEvents;

pub const LOGOUT_REDIRECT: &str = "/login";

#[async_trait]
pub trait ILogoutUseCase: Send + Sync {
    /// Ends the session. Returns false when it was not signed in; that is not
    /// an error.
    async fn execute(&self, session_id: &SessionId) -> bool;
}

#[derive(Clone)]
pub struct LogoutUseCase {
    sessions: Arc<dyn SessionStore + Send + Sync>,
    events: AuthEvents,
}

impl LogoutUseCase {
    pub fn new(sessions: Arc<dyn SessionStore + Send + Sync>, events: AuthEvents) -> Self {
        Self { sessions, events }
    }
}

#[async_trait]
impl ILogoutUseCase for LogoutUseCase {
    async fn execute(&self, session_id: &SessionId) -> bool {
        if !self.sessions.remove_session(session_id) {
            return false;
        }

        info!("Session {} signed out", session_id);
        self.events.publish(AuthChange::SignedOut {
            session_id: session_id.clone(),
        });
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::adapter::outgoing::in_memory_session_store::InMemorySessionStore;
    use crate::auth::application::domain::entities::AUTH_TOKEN_KEY;

    #[tokio::test]
    async fn test_logout_clears_session_and_broadcasts() {
        let store = InMemorySessionStore::new();
        let session = SessionId::from("s1");
        store.put(&session, AUTH_TOKEN_KEY, "jwt".to_string());

        let events = AuthEvents::new();
        let mut changes = events.subscribe();
        let use_case = LogoutUseCase::new(Arc::new(store.clone()), events);

        assert!(use_case.execute(&session).await);
        assert_eq!(store.get(&session, AUTH_TOKEN_KEY), None);
        assert_eq!(
            changes.recv().await.unwrap(),
            AuthChange::SignedOut {
                session_id: session.clone()
            }
        );
    }

    #[tokio::test]
    async fn test_logout_of_unknown_session_is_quiet() {
        let events = AuthEvents::new();
        let mut changes = events.subscribe();
        let use_case = LogoutUseCase::new(Arc::new(InMemorySessionStore::new()), events);

        assert!(!use_case.execute(&SessionId::from("nobody")).await);
        assert!(changes.try_recv().is_err());
    }
}
