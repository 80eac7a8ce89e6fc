use async_trait::async_trait;

use crate::auth::application::domain::entities::Credential;
use crate::modules::media::application::domain::entities::ImageFile;
use crate::modules::project::application::domain::entities::{Project, ProjectForm};
use crate::shared::form::FormError;

pub const PROJECT_CREATED: &str = "Project added successfully!";
pub const CREATE_PROJECT_FAILED: &str = "Failed to add project. Please try again.";

#[async_trait]
pub trait CreateProjectUseCase: Send + Sync {
    /// Uploads `thumbnail` first when given; its URL replaces the form's.
    /// `Ok(None)` when the API accepted the project without echoing it.
    async fn execute(
        &self,
        form: ProjectForm,
        thumbnail: Option<ImageFile>,
        credential: &Credential,
    ) -> Result<Option<Project>, FormError>;
}
