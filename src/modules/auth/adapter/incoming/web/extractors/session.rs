use std::future::{ready, Ready};

use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use tracing::debug;

use crate::auth::application::domain::entities::{Credential, SessionId, SESSION_COOKIE};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Header alternative to the session cookie, for API clients without a
/// cookie jar.
pub const SESSION_HEADER: &str = "X-Dashboard-Session";

/// A signed-in dashboard session. Rejects the request with 401 "Please login"
/// when the session is unknown or has no stored credential.
#[derive(Debug, Clone)]
pub struct DashboardSession {
    pub session_id: SessionId,
    pub credential: Credential,
}

impl DashboardSession {
    /// Key for the in-flight registry: one submission per form per session.
    pub fn submission_key(&self, form: &str) -> String {
        format!("{}:{}", self.session_id, form)
    }
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for DashboardSession {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let data = match req.app_data::<web::Data<AppState>>() {
            Some(data) => data,
            None => return ready(Err(create_api_error(ApiResponse::internal_error()))),
        };

        let session_id = match session_id_from_request(req) {
            Some(id) => id,
            None => {
                return ready(Err(create_api_error(ApiResponse::unauthorized(
                    "Please login",
                ))))
            }
        };

        match data.session_credentials.resolve(&session_id) {
            Ok(credential) => ready(Ok(DashboardSession {
                session_id,
                credential,
            })),
            Err(e) => {
                debug!("Session {} rejected: {}", session_id, e);
                ready(Err(create_api_error(ApiResponse::unauthorized(
                    "Please login",
                ))))
            }
        }
    }
}

/// Session id from the cookie, falling back to the header.
pub fn session_id_from_request(req: &HttpRequest) -> Option<SessionId> {
    if let Some(cookie) = req.cookie(SESSION_COOKIE) {
        if !cookie.value().is_empty() {
            return Some(SessionId::from(cookie.value()));
        }
    }

    req.headers()
        .get(SESSION_HEADER)?
        .to_str()
        .ok()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(SessionId::from)
}
