use actix_web::{delete, web, Responder};

use crate::auth::adapter::incoming::web::extractors::session::DashboardSession;
use crate::modules::experience::application::ports::incoming::use_cases::{
    DELETE_EXPERIENCE_FAILED, EXPERIENCE_DELETED,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/dashboard/experiences/{id}")]
pub async fn delete_experience_handler(
    session: DashboardSession,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .experience
        .delete
        .execute(&path.into_inner(), &session.credential)
        .await
    {
        Ok(()) => ApiResponse::done(EXPERIENCE_DELETED, None),
        Err(e) => ApiResponse::from_remote_error(&e, DELETE_EXPERIENCE_FAILED),
    }
}
