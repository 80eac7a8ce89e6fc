use async_trait::async_trait;

use crate::auth::application::domain::entities::Credential;
use crate::shared::remote::RemoteError;

pub const EXPERIENCE_DELETED: &str = "Experience deleted successfully";
pub const DELETE_EXPERIENCE_FAILED: &str = "Failed to delete experience";

#[async_trait]
pub trait DeleteExperienceUseCase: Send + Sync {
    async fn execute(&self, id: &str, credential: &Credential) -> Result<(), RemoteError>;
}
