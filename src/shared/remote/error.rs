/// Failure talking to the external portfolio API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RemoteError {
    /// Network, DNS, TLS or timeout; nothing usable came back.
    #[error("request failed: {0}")]
    Transport(String),

    /// Non-2xx status.
    #[error("api error ({status}): {}", .message.as_deref().unwrap_or("no message"))]
    Api { status: u16, message: Option<String> },

    /// 2xx, but the envelope's `status` was missing or falsy.
    #[error("api rejected the request: {}", .message.as_deref().unwrap_or("no message"))]
    Rejected { message: Option<String> },

    #[error("resource not found")]
    NotFound { message: Option<String> },

    /// 2xx with a body that did not match the expected record.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl RemoteError {
    /// The API's own message, if it sent a non-empty one.
    pub fn api_message(&self) -> Option<&str> {
        let message = match self {
            RemoteError::Api { message, .. }
            | RemoteError::Rejected { message }
            | RemoteError::NotFound { message } => message.as_deref(),
            RemoteError::Transport(_) | RemoteError::Decode(_) => None,
        };

        message.filter(|m| !m.is_empty())
    }

    /// What the page shows: the API's message verbatim, else `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        self.api_message().unwrap_or(fallback).to_string()
    }
}

impl From<reqwest::Error> for RemoteError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            RemoteError::Decode(err.to_string())
        } else {
            RemoteError::Transport(err.to_string())
        }
    }
}
