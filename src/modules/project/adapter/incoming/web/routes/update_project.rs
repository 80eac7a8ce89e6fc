use actix_web::{patch, web, Responder};

use crate::auth::adapter::incoming::web::extractors::session::DashboardSession;
use crate::modules::project::application::domain::entities::ProjectEditForm;
use crate::modules::project::application::ports::incoming::use_cases::{
    PROJECTS_PAGE, PROJECT_UPDATED, UPDATE_PROJECT_FAILED,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[patch("/dashboard/projects/{id}")]
pub async fn update_project_handler(
    session: DashboardSession,
    path: web::Path<String>,
    req: web::Json<ProjectEditForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();
    let Some(_permit) = data
        .in_flight
        .try_acquire(session.submission_key(&format!("project:edit:{}", id)))
    else {
        return ApiResponse::busy();
    };

    match data
        .project
        .update
        .execute(&id, req.into_inner(), &session.credential)
        .await
    {
        Ok(saved) => ApiResponse::submitted(saved, PROJECT_UPDATED, PROJECTS_PAGE),
        Err(err) => ApiResponse::from_form_error(&err, UPDATE_PROJECT_FAILED),
    }
}
