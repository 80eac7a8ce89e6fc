use actix_web::{delete, web, Responder};

use crate::auth::adapter::incoming::web::extractors::session::DashboardSession;
use crate::modules::blog::application::ports::incoming::use_cases::{
    BLOG_DELETED, DELETE_BLOG_FAILED,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/dashboard/blogs/{id}")]
pub async fn delete_blog_handler(
    session: DashboardSession,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .blog
        .delete
        .execute(&path.into_inner(), &session.credential)
        .await
    {
        Ok(()) => ApiResponse::done(BLOG_DELETED, None),
        Err(e) => ApiResponse::from_remote_error(&e, DELETE_BLOG_FAILED),
    }
}
