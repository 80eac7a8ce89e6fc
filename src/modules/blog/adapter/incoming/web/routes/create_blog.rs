use actix_web::{post, web, Responder};

use crate::auth::adapter::incoming::web::extractors::session::DashboardSession;
use crate::modules::blog::application::domain::entities::BlogForm;
use crate::modules::blog::application::ports::incoming::use_cases::{
    BLOG_CREATED, BLOG_LIST_PAGE, CREATE_BLOG_FAILED,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[post("/dashboard/blogs")]
pub async fn create_blog_handler(
    session: DashboardSession,
    req: web::Json<BlogForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Some(_permit) = data
        .in_flight
        .try_acquire(session.submission_key("blog:create"))
    else {
        return ApiResponse::busy();
    };

    match data
        .blog
        .create
        .execute(req.into_inner(), &session.credential)
        .await
    {
        Ok(saved) => ApiResponse::created(saved, BLOG_CREATED, BLOG_LIST_PAGE),
        Err(err) => ApiResponse::from_form_error(&err, CREATE_BLOG_FAILED),
    }
}
