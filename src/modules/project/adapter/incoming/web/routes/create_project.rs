use actix_web::{post, web, HttpRequest, HttpResponse, Responder};

use crate::auth::adapter::incoming::web::extractors::session::DashboardSession;
use crate::modules::media::adapter::incoming::web::routes::{raw_image, UploadQuery};
use crate::modules::media::application::domain::entities::ImageFile;
use crate::modules::project::application::domain::entities::ProjectForm;
use crate::modules::project::application::ports::incoming::use_cases::{
    CREATE_PROJECT_FAILED, PROJECTS_PAGE, PROJECT_CREATED,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[post("/dashboard/projects")]
pub async fn create_project_handler(
    session: DashboardSession,
    req: web::Json<ProjectForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    create_project(&session, req.into_inner(), None, &data).await
}

/// Fields in the query string, the picked thumbnail as the raw body.
/// The thumbnail is uploaded before the project is sent.
#[post("/dashboard/projects/with-thumbnail")]
pub async fn create_project_with_thumbnail_handler(
    session: DashboardSession,
    req: HttpRequest,
    form: web::Query<ProjectForm>,
    file: web::Query<UploadQuery>,
    body: web::Bytes,
    data: web::Data<AppState>,
) -> impl Responder {
    let thumbnail = raw_image(&req, file.into_inner().filename, body);
    create_project(&session, form.into_inner(), Some(thumbnail), &data).await
}

async fn create_project(
    session: &DashboardSession,
    form: ProjectForm,
    thumbnail: Option<ImageFile>,
    data: &AppState,
) -> HttpResponse {
    let Some(_permit) = data
        .in_flight
        .try_acquire(session.submission_key("project:create"))
    else {
        return ApiResponse::busy();
    };

    match data
        .project
        .create
        .execute(form, thumbnail, &session.credential)
        .await
    {
        Ok(saved) => ApiResponse::created(saved, PROJECT_CREATED, PROJECTS_PAGE),
        Err(err) => ApiResponse::from_form_error(&err, CREATE_PROJECT_FAILED),
    }
}
