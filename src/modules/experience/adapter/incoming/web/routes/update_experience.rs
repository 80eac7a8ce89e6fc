use actix_web::{patch, web, Responder};

use crate::auth::adapter::incoming::web::extractors::session::DashboardSession;
use crate::modules::experience::application::domain::entities::ExperienceEditForm;
use crate::modules::experience::application::ports::incoming::use_cases::{
    EXPERIENCE_PAGE, EXPERIENCE_UPDATED, UPDATE_EXPERIENCE_FAILED,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[patch("/dashboard/experiences/{id}")]
pub async fn update_experience_handler(
    session: DashboardSession,
    path: web::Path<String>,
    req: web::Json<ExperienceEditForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();
    let Some(_permit) = data
        .in_flight
        .try_acquire(session.submission_key(&format!("experience:edit:{}", id)))
    else {
        return ApiResponse::busy();
    };

    match data
        .experience
        .update
        .execute(&id, req.into_inner(), &session.credential)
        .await
    {
        Ok(saved) => ApiResponse::submitted(saved, EXPERIENCE_UPDATED, EXPERIENCE_PAGE),
        Err(err) => ApiResponse::from_form_error(&err, UPDATE_EXPERIENCE_FAILED),
    }
}
