use actix_web::cookie::Cookie;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::{json, Map};

use crate::auth::adapter::outgoing::in_memory_session_store::InMemorySessionStore;
use crate::auth::application::domain::entities::{
    AuthUser, Credential, SessionId, AUTH_TOKEN_KEY, AUTH_USER_KEY, SESSION_COOKIE,
};
use crate::auth::application::ports::outgoing::SessionStore;

/// A token as the portfolio API would issue it. The dashboard never checks
/// the signature, so any secret works.
pub fn signed_token(user_id: &str) -> String {
    encode(
        &Header::default(),
        &json!({
            "_id": user_id,
            "email": "admin@example.com",
            "role": "admin",
            "iat": 1700000000,
        }),
        &EncodingKey::from_secret(b"portfolio-api-secret"),
    )
    .unwrap()
}

pub fn sample_user(user_id: &str) -> AuthUser {
    AuthUser {
        id: user_id.to_string(),
        email: Some("admin@example.com".to_string()),
        role: Some("admin".to_string()),
        claims: Map::new(),
    }
}

pub fn sample_credential() -> Credential {
    Credential::new(signed_token("u1"), sample_user("u1"))
}

/// A store holding one signed-in session for `user_id`.
pub fn signed_in_store(user_id: &str) -> (InMemorySessionStore, SessionId) {
    let store = InMemorySessionStore::new();
    let session_id = SessionId::generate();

    store.put(&session_id, AUTH_TOKEN_KEY, signed_token(user_id));
    store.put(
        &session_id,
        AUTH_USER_KEY,
        serde_json::to_string(&sample_user(user_id)).unwrap(),
    );

    (store, session_id)
}

pub fn session_cookie(session_id: &SessionId) -> Cookie<'static> {
    Cookie::new(SESSION_COOKIE, session_id.to_string())
}
