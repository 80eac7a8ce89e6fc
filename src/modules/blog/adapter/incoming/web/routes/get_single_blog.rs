use actix_web::{get, web, Responder};

use crate::modules::blog::application::domain::entities::BlogForm;
use crate::modules::blog::application::ports::incoming::use_cases::LOAD_BLOGS_FAILED;
use crate::shared::api::{ApiResponse, EditView};
use crate::AppState;

#[get("/dashboard/blogs/{id}")]
pub async fn get_single_blog_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.blog.get_single.execute(&path.into_inner()).await {
        Ok(post) => {
            let form = BlogForm::from(&post);
            ApiResponse::success(EditView { record: post, form })
        }
        Err(e) => ApiResponse::from_remote_error(&e, LOAD_BLOGS_FAILED),
    }
}
