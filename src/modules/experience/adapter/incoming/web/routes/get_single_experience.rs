use actix_web::{get, web, Responder};

use crate::modules::experience::application::domain::entities::ExperienceForm;
use crate::modules::experience::application::ports::incoming::use_cases::LOAD_EXPERIENCES_FAILED;
use crate::shared::api::{ApiResponse, EditView};
use crate::AppState;

#[get("/dashboard/experiences/{id}")]
pub async fn get_single_experience_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.experience.get_single.execute(&path.into_inner()).await {
        Ok(experience) => {
            let form = ExperienceForm::from(&experience);
            ApiResponse::success(EditView {
                record: experience,
                form,
            })
        }
        Err(e) => ApiResponse::from_remote_error(&e, LOAD_EXPERIENCES_FAILED),
    }
}
