use async_trait::async_trait;

use crate::auth::application::domain::entities::Credential;
use crate::modules::experience::application::domain::entities::{
    Experience, ExperienceEditForm,
};
use crate::shared::form::FormError;

pub const EXPERIENCE_UPDATED: &str = "Experience updated successfully!";
pub const UPDATE_EXPERIENCE_FAILED: &str = "Failed to update experience";

#[async_trait]
pub trait UpdateExperienceUseCase: Send + Sync {
    async fn execute(
        &self,
        id: &str,
        form: ExperienceEditForm,
        credential: &Credential,
    ) -> Result<Option<Experience>, FormError>;
}
