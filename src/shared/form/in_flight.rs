use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError};

/// Submissions currently running, keyed by session and form.
///
/// A page disables its submit button while busy, but nothing stops a second
/// tab or a replayed request. Routes take a permit before running a submit
/// use case; a second submit of the same form for the same session is turned
/// away until the first one finishes.
#[derive(Clone, Default)]
pub struct InFlightSubmissions {
    keys: Arc<Mutex<HashSet<String>>>,
}

impl InFlightSubmissions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn try_acquire(&self, key: impl Into<String>) -> Option<SubmissionPermit> {
        let key = key.into();
        let mut keys = self.keys.lock().unwrap_or_else(PoisonError::into_inner);

        if !keys.insert(key.clone()) {
            return None;
        }

        Some(SubmissionPermit {
            key,
            keys: Arc::clone(&self.keys),
        })
    }

    pub fn is_in_flight(&self, key: &str) -> bool {
        self.keys
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(key)
    }
}

/// Releases its key when dropped.
pub struct SubmissionPermit {
    key: String,
    keys: Arc<Mutex<HashSet<String>>>,
}

impl Drop for SubmissionPermit {
    fn drop(&mut self) {
        self.keys
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.key);
    }
}
