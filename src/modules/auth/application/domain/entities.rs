use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Session storage key holding the bearer token string.
pub const AUTH_TOKEN_KEY: &str = "authToken";

/// Session storage key holding the JSON-serialized token payload.
pub const AUTH_USER_KEY: &str = "authUser";

/// Name of the cookie that carries the dashboard session id.
pub const SESSION_COOKIE: &str = "dashboard_session";

/// Decoded payload of the token the portfolio API issued at login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    #[serde(alias = "_id", alias = "userId")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Everything else the token carried (`iat`, `exp`, ...).
    #[serde(flatten)]
    pub claims: Map<String, Value>,
}

/// Token plus the user it belongs to. Handed explicitly to every operation
/// that needs authorization.
#[derive(Clone, PartialEq)]
pub struct Credential {
    token: String,
    user: AuthUser,
}

impl Credential {
    pub fn new(token: impl Into<String>, user: AuthUser) -> Self {
        Self {
            token: token.into(),
            user,
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn user(&self) -> &AuthUser {
        &self.user
    }

    pub fn user_id(&self) -> &str {
        &self.user.id
    }
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("token", &"<redacted>")
            .field("user", &self.user)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for SessionId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for SessionId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Broadcast whenever the signed-in state of a session changes, so anything
/// showing auth-dependent information can refresh.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthChange {
    SignedIn { session_id: SessionId, user: AuthUser },
    SignedOut { session_id: SessionId },
}
