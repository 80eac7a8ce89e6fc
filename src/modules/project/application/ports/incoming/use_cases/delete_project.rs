use async_trait::async_trait;

use crate::auth::application::domain::entities::Credential;
use crate::shared::remote::RemoteError;

pub const PROJECT_DELETED: &str = "Project deleted successfully";
pub const DELETE_PROJECT_FAILED: &str = "Failed to delete project";

#[async_trait]
pub trait DeleteProjectUseCase: Send + Sync {
    async fn execute(&self, id: &str, credential: &Credential) -> Result<(), RemoteError>;
}
