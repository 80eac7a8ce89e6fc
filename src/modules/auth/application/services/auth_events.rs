use tokio::sync::broadcast;
use tracing::debug;

use crate::auth::application::domain::entities::AuthChange;

const CHANNEL_CAPACITY: usize = 64;

/// Fan-out of sign-in/sign-out notifications.
#[derive(Clone)]
pub struct AuthEvents {
    sender: broadcast::Sender<AuthChange>,
}

impl Default for AuthEvents {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthEvents {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<AuthChange> {
        self.sender.subscribe()
    }

    pub fn publish(&self, change: AuthChange) {
        // no subscribers is fine
        if self.sender.send(change).is_err() {
            debug!("Auth change published with no listeners");
        }
    }
}
