use crate::auth::application::domain::entities::SessionId;

/// Session-scoped key/value storage. Written on login and logout only,
/// read on every authenticated request.
pub trait SessionStore: Send + Sync {
    fn put(&self, session: &SessionId, key: &str, value: String);

    /// `None` for unknown keys and for sessions that have expired.
    fn get(&self, session: &SessionId, key: &str) -> Option<String>;

    /// Drops every key of the session. Returns false when nothing was stored.
    fn remove_session(&self, session: &SessionId) -> bool;

    /// Forgets expired sessions. Returns how many were dropped.
    fn sweep_expired(&self) -> usize;
}
