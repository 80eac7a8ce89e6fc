use actix_web::{get, web, Responder};

use crate::modules::blog::application::ports::incoming::use_cases::LOAD_BLOGS_FAILED;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/dashboard/blogs")]
pub async fn get_blogs_handler(data: web::Data<AppState>) -> impl Responder {
    match data.blog.get_list.execute().await {
        Ok(posts) => ApiResponse::success(posts),
        Err(e) => ApiResponse::from_remote_error(&e, LOAD_BLOGS_FAILED),
    }
}
