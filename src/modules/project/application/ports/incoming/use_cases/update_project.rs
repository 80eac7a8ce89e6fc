use async_trait::async_trait;

use crate::auth::application::domain::entities::Credential;
use crate::modules::project::application::domain::entities::{Project, ProjectEditForm};
use crate::shared::form::FormError;

pub const PROJECT_UPDATED: &str = "Project updated successfully!";
pub const UPDATE_PROJECT_FAILED: &str = "Failed to update project. Please try again.";

#[async_trait]
pub trait UpdateProjectUseCase: Send + Sync {
    async fn execute(
        &self,
        id: &str,
        form: ProjectEditForm,
        credential: &Credential,
    ) -> Result<Option<Project>, FormError>;
}
