use async_trait::async_trait;

use crate::auth::application::domain::entities::Credential;
use crate::modules::experience::application::domain::entities::{Experience, ExperienceForm};
use crate::shared::form::FormError;

pub const EXPERIENCE_CREATED: &str = "Experience submitted successfully!";
pub const CREATE_EXPERIENCE_FAILED: &str = "Failed to submit experience";

#[async_trait]
pub trait CreateExperienceUseCase: Send + Sync {
    async fn execute(
        &self,
        form: ExperienceForm,
        credential: &Credential,
    ) -> Result<Option<Experience>, FormError>;
}
