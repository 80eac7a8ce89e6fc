use std::fmt;

use crate::auth::application::domain::entities::AuthUser;

#[derive(Debug, Clone, PartialEq)]
pub enum TokenError {
    Malformed(String),
    MissingUserId,
}

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenError::Malformed(msg) => write!(f, "Malformed token: {}", msg),
            TokenError::MissingUserId => write!(f, "Token payload has no user id"),
        }
    }
}

impl std::error::Error for TokenError {}

/// Reads the payload of a token issued by the external API. Verification is
/// the API's job; the dashboard only needs the claims for display.
pub trait TokenDecoder: Send + Sync {
    fn decode(&self, token: &str) -> Result<AuthUser, TokenError>;
}
