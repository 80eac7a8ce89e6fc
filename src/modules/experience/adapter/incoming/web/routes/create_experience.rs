use actix_web::{post, web, Responder};

use crate::auth::adapter::incoming::web::extractors::session::DashboardSession;
use crate::modules::experience::application::domain::entities::ExperienceForm;
use crate::modules::experience::application::ports::incoming::use_cases::{
    CREATE_EXPERIENCE_FAILED, EXPERIENCE_CREATED, EXPERIENCE_PAGE,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[post("/dashboard/experiences")]
pub async fn create_experience_handler(
    session: DashboardSession,
    req: web::Json<ExperienceForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Some(_permit) = data
        .in_flight
        .try_acquire(session.submission_key("experience:create"))
    else {
        return ApiResponse::busy();
    };

    match data
        .experience
        .create
        .execute(req.into_inner(), &session.credential)
        .await
    {
        Ok(saved) => ApiResponse::created(saved, EXPERIENCE_CREATED, EXPERIENCE_PAGE),
        Err(err) => ApiResponse::from_form_error(&err, CREATE_EXPERIENCE_FAILED),
    }
}
