use actix_web::{delete, web, Responder};

use crate::auth::adapter::incoming::web::extractors::session::DashboardSession;
use crate::modules::project::application::ports::incoming::use_cases::{
    DELETE_PROJECT_FAILED, PROJECT_DELETED,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/dashboard/projects/{id}")]
pub async fn delete_project_handler(
    session: DashboardSession,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .project
        .delete
        .execute(&path.into_inner(), &session.credential)
        .await
    {
        Ok(()) => ApiResponse::done(PROJECT_DELETED, None),
        Err(e) => ApiResponse::from_remote_error(&e, DELETE_PROJECT_FAILED),
    }
}
