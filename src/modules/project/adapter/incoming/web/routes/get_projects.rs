use actix_web::{get, web, Responder};

use crate::modules::project::application::ports::incoming::use_cases::LOAD_PROJECTS_FAILED;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/dashboard/projects")]
pub async fn get_projects_handler(data: web::Data<AppState>) -> impl Responder {
    match data.project.get_list.execute().await {
        Ok(projects) => ApiResponse::success(projects),
        Err(e) => ApiResponse::from_remote_error(&e, LOAD_PROJECTS_FAILED),
    }
}
