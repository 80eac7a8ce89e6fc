use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::{Duration, Instant};

use tracing::debug;

use crate::auth::application::domain::entities::SessionId;
use crate::auth::application::ports::outgoing::SessionStore;
use crate::shared::config::DEFAULT_SESSION_IDLE_SECS;

struct Session {
    values: HashMap<String, String>,
    last_seen: Instant,
}

impl Session {
    fn is_idle(&self, ttl: Duration, now: Instant) -> bool {
        now.saturating_duration_since(self.last_seen) >= ttl
    }
}

type Sessions = HashMap<SessionId, Session>;

/// Process-local session storage. A session lives until logout, until it
/// sits idle longer than the TTL, or until the process exits.
#[derive(Clone)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<Sessions>>,
    idle_ttl: Duration,
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::with_idle_ttl(Duration::from_secs(DEFAULT_SESSION_IDLE_SECS))
    }
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_idle_ttl(idle_ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            idle_ttl,
        }
    }

    pub fn session_count(&self) -> usize {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl SessionStore for InMemorySessionStore {
    fn put(&self, session: &SessionId, key: &str, value: String) {
        let now = Instant::now();
        let mut sessions = self.sessions.write().unwrap_or_else(PoisonError::into_inner);
        let entry = sessions.entry(session.clone()).or_insert_with(|| Session {
            values: HashMap::new(),
            last_seen: now,
        });
        entry.values.insert(key.to_string(), value);
        entry.last_seen = now;
    }

    fn get(&self, session: &SessionId, key: &str) -> Option<String> {
        let now = Instant::now();
        let mut sessions = self.sessions.write().unwrap_or_else(PoisonError::into_inner);

        if sessions.get(session)?.is_idle(self.idle_ttl, now) {
            sessions.remove(session);
            debug!("Session {} expired after sitting idle", session);
            return None;
        }

        let entry = sessions.get_mut(session)?;
        entry.last_seen = now;
        entry.values.get(key).cloned()
    }

    fn remove_session(&self, session: &SessionId) -> bool {
        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(session)
            .is_some()
    }

    fn sweep_expired(&self) -> usize {
        let now = Instant::now();
        let mut sessions = self.sessions.write().unwrap_or_else(PoisonError::into_inner);
        let before = sessions.len();
        sessions.retain(|_, s| !s.is_idle(self.idle_ttl, now));
        before - sessions.len()
    }
}
