use actix_web::{get, web, Responder};

use crate::modules::experience::application::ports::incoming::use_cases::LOAD_EXPERIENCES_FAILED;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/dashboard/experiences")]
pub async fn get_experiences_handler(data: web::Data<AppState>) -> impl Responder {
    match data.experience.get_list.execute().await {
        Ok(list) => ApiResponse::success(list),
        Err(e) => ApiResponse::from_remote_error(&e, LOAD_EXPERIENCES_FAILED),
    }
}
