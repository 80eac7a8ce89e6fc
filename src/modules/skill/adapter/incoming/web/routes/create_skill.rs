use actix_web::{post, web, HttpRequest, HttpResponse, Responder};

use crate::auth::adapter::incoming::web::extractors::session::DashboardSession;
use crate::modules::media::adapter::incoming::web::routes::{raw_image, UploadQuery};
use crate::modules::media::application::domain::entities::ImageFile;
use crate::modules::skill::application::domain::entities::SkillForm;
use crate::modules::skill::application::ports::incoming::use_cases::{
    CREATE_SKILL_FAILED, SKILLS_PAGE, SKILL_CREATED,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[post("/dashboard/skills")]
pub async fn create_skill_handler(
    session: DashboardSession,
    req: web::Json<SkillForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    create_skill(&session, req.into_inner(), None, &data).await
}

/// `?name=` and `?filename=` in the query, the icon as the raw body.
#[post("/dashboard/skills/with-icon")]
pub async fn create_skill_with_icon_handler(
    session: DashboardSession,
    req: HttpRequest,
    form: web::Query<SkillForm>,
    file: web::Query<UploadQuery>,
    body: web::Bytes,
    data: web::Data<AppState>,
) -> impl Responder {
    let icon = raw_image(&req, file.into_inner().filename, body);
    create_skill(&session, form.into_inner(), Some(icon), &data).await
}

async fn create_skill(
    session: &DashboardSession,
    form: SkillForm,
    icon: Option<ImageFile>,
    data: &AppState,
) -> HttpResponse {
    let Some(_permit) = data
        .in_flight
        .try_acquire(session.submission_key("skill:create"))
    else {
        return ApiResponse::busy();
    };

    match data
        .skill
        .create
        .execute(form, icon, &session.credential)
        .await
    {
        Ok(saved) => ApiResponse::created(saved, SKILL_CREATED, SKILLS_PAGE),
        Err(err) => ApiResponse::from_form_error(&err, CREATE_SKILL_FAILED),
    }
}
