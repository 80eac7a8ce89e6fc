use actix_web::{get, Responder};

use crate::auth::adapter::incoming::web::extractors::session::DashboardSession;
use crate::shared::api::ApiResponse;

/// The signed-in user, for anything that shows auth-dependent information.
#[get("/dashboard/me")]
pub async fn current_user_handler(session: DashboardSession) -> impl Responder {
    ApiResponse::success(session.credential.user().clone())
}
