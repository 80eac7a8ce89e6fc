use actix_web::{get, web, Responder};

use crate::modules::skill::application::ports::incoming::use_cases::LOAD_SKILLS_FAILED;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/dashboard/skills")]
pub async fn get_skills_handler(data: web::Data<AppState>) -> impl Responder {
    match data.skill.get_list.execute().await {
        Ok(skills) => ApiResponse::success(skills),
        Err(e) => ApiResponse::from_remote_error(&e, LOAD_SKILLS_FAILED),
    }
}
