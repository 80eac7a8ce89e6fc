use actix_web::cookie::Cookie;
use actix_web::{post, web, HttpRequest, HttpResponse, Responder};

use crate::auth::adapter::incoming::web::extractors::session::session_id_from_request;
use crate::auth::application::domain::entities::SESSION_COOKIE;
use crate::auth::application::use_cases::logout_user::LOGOUT_REDIRECT;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[post("/dashboard/logout")]
pub async fn logout_user_handler(req: HttpRequest, data: web::Data<AppState>) -> impl Responder {
    if let Some(session_id) = session_id_from_request(&req) {
        data.auth.logout.execute(&session_id).await;
    }

    let mut removal = Cookie::build(SESSION_COOKIE, "").path("/").finish();
    removal.make_removal();

    HttpResponse::Ok().cookie(removal).json(ApiResponse::<()> {
        status: true,
        data: None,
        message: Some("Logged out successfully".to_string()),
        errors: None,
        redirect: Some(LOGOUT_REDIRECT.to_string()),
    })
}
