use async_trait::async_trait;

use crate::modules::project::application::domain::entities::Project;
use crate::shared::remote::RemoteError;

pub const LOAD_PROJECTS_FAILED: &str = "Failed to load project data";

#[async_trait]
pub trait GetProjectsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Project>, RemoteError>;
}
