use actix_web::http::header::CONTENT_TYPE;
use actix_web::{post, web, HttpRequest, Responder};
use serde::Deserialize;

use crate::auth::adapter::incoming::web::extractors::session::DashboardSession;
use crate::modules::media::application::domain::entities::ImageFile;
use crate::modules::media::application::ports::outgoing::UploadError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct UploadQuery {
    #[serde(default)]
    pub filename: String,
}

/// A file sent as the raw request body, typed by `Content-Type`.
pub fn raw_image(req: &HttpRequest, file_name: String, body: web::Bytes) -> ImageFile {
    let content_type = req
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    ImageFile::new(file_name, content_type, body.to_vec())
}

/// Raw file body; the name comes from `?filename=` and the type from
/// `Content-Type`.
#[post("/dashboard/uploads")]
pub async fn upload_image_handler(
    _session: DashboardSession,
    req: HttpRequest,
    query: web::Query<UploadQuery>,
    body: web::Bytes,
    data: web::Data<AppState>,
) -> impl Responder {
    let file = raw_image(&req, query.into_inner().filename, body);

    match data.media.upload.execute(file).await {
        Ok(uploaded) => ApiResponse::success(uploaded),
        Err(e @ UploadError::Policy(_)) => ApiResponse::bad_request(&e.user_message()),
        Err(e) => ApiResponse::bad_gateway(&e.user_message()),
    }
}
