use async_trait::async_trait;

use crate::auth::application::domain::entities::Credential;
use crate::shared::remote::RemoteError;

pub const SKILL_DELETED: &str = "Skill deleted successfully";
pub const DELETE_SKILL_FAILED: &str = "Failed to delete skill";

#[async_trait]
pub trait DeleteSkillUseCase: Send + Sync {
    async fn execute(&self, id: &str, credential: &Credential) -> Result<(), RemoteError>;
}
