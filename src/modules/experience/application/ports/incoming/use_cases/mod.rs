mod create_experience;
mod delete_experience;
mod get_experiences;
mod get_single_experience;
mod update_experience;

pub use create_experience::{
    CreateExperienceUseCase, CREATE_EXPERIENCE_FAILED, EXPERIENCE_CREATED,
};
pub use delete_experience::{
    DeleteExperienceUseCase, DELETE_EXPERIENCE_FAILED, EXPERIENCE_DELETED,
};
pub use get_experiences::{GetExperiencesUseCase, LOAD_EXPERIENCES_FAILED};
pub use get_single_experience::GetSingleExperienceUseCase;
pub use update_experience::{
    UpdateExperienceUseCase, EXPERIENCE_UPDATED, UPDATE_EXPERIENCE_FAILED,
};

pub const EXPERIENCE_PAGE: &str = "/dashboard/experience";
