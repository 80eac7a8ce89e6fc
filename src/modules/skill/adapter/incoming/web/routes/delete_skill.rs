use actix_web::{delete, web, Responder};

use crate::auth::adapter::incoming::web::extractors::session::DashboardSession;
use crate::modules::skill::application::ports::incoming::use_cases::{
    DELETE_SKILL_FAILED, SKILL_DELETED,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/dashboard/skills/{id}")]
pub async fn delete_skill_handler(
    session: DashboardSession,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .skill
        .delete
        .execute(&path.into_inner(), &session.credential)
        .await
    {
        Ok(()) => ApiResponse::done(SKILL_DELETED, None),
        Err(e) => ApiResponse::from_remote_error(&e, DELETE_SKILL_FAILED),
    }
}
