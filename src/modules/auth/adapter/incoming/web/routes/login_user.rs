use actix_web::cookie::{Cookie, SameSite};
use actix_web::{post, web, HttpResponse, Responder};
use serde::Serialize;
use tracing::error;

use crate::auth::application::domain::entities::{AuthUser, SESSION_COOKIE};
use crate::auth::application::use_cases::login_user::{
    LoginError, LoginForm, LOGIN_FAILED, LOGIN_REDIRECT,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginView {
    pub session_id: String,
    pub user: AuthUser,
}

#[post("/dashboard/login")]
pub async fn login_user_handler(
    req: web::Json<LoginForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.auth.login.execute(req.into_inner()).await {
        Ok(outcome) => {
            let cookie = Cookie::build(SESSION_COOKIE, outcome.session_id.to_string())
                .path("/")
                .http_only(true)
                .same_site(SameSite::Lax)
                .finish();

            HttpResponse::Ok().cookie(cookie).json(ApiResponse {
                status: true,
                data: Some(LoginView {
                    session_id: outcome.session_id.to_string(),
                    user: outcome.user,
                }),
                message: None,
                errors: None,
                redirect: Some(LOGIN_REDIRECT.to_string()),
            })
        }
        Err(LoginError::Form(err)) => ApiResponse::from_form_error(&err, LOGIN_FAILED),
        Err(e) => {
            error!("Login could not complete: {}", e);
            ApiResponse::bad_gateway(LOGIN_FAILED)
        }
    }
}
