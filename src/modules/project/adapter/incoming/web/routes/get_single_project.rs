use actix_web::{get, web, Responder};

use crate::modules::project::application::domain::entities::ProjectForm;
use crate::modules::project::application::ports::incoming::use_cases::LOAD_PROJECTS_FAILED;
use crate::shared::api::{ApiResponse, EditView};
use crate::AppState;

/// Record plus the edit form pre-filled from it.
#[get("/dashboard/projects/{id}")]
pub async fn get_single_project_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.project.get_single.execute(&path.into_inner()).await {
        Ok(project) => {
            let form = ProjectForm::from(&project);
            ApiResponse::success(EditView {
                record: project,
                form,
            })
        }
        Err(e) => ApiResponse::from_remote_error(&e, LOAD_PROJECTS_FAILED),
    }
}
