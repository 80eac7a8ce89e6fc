use async_trait::async_trait;
use tracing::info;

use crate::auth::application::domain::entities::Credential;
use crate::modules::project::application::domain::entities::{Project, ProjectEditForm};
use crate::modules::project::application::ports::incoming::use_cases::{
    UpdateProjectUseCase, UPDATE_PROJECT_FAILED,
};
use crate::modules::project::application::ports::outgoing::ProjectApi;
use crate::shared::form::{FormController, FormError};

pub struct UpdateProjectService<A>
where
    A: ProjectApi,
{
    api: A,
}

impl<A> UpdateProjectService<A>
where
    A: ProjectApi,
{
    pub fn new(api: A) -> Self {
        Self { api }
    }
}

#[async_trait]
impl<A> UpdateProjectUseCase for UpdateProjectService<A>
where
    A: ProjectApi + Send + Sync,
{
    async fn execute(
        &self,
        id: &str,
        form: ProjectEditForm,
        credential: &Credential,
    ) -> Result<Option<Project>, FormError> {
        let mut controller = FormController::new(form, UPDATE_PROJECT_FAILED);

        let saved = controller
            .submit(|patch| async move { self.api.update(id, &patch, credential).await })
            .await?;

        info!("Project {} updated", id);
        Ok(saved)
    }
}
