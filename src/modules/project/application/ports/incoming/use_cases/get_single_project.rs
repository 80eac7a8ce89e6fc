use async_trait::async_trait;

use crate::modules::project::application::domain::entities::Project;
use crate::shared::remote::RemoteError;

#[async_trait]
pub trait GetSingleProjectUseCase: Send + Sync {
    async fn execute(&self, id: &str) -> Result<Project, RemoteError>;
}
