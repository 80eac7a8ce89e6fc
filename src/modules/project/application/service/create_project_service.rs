use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::auth::application::domain::entities::Credential;
use crate::modules::media::application::domain::entities::ImageFile;
use crate::modules::media::application::ports::incoming::use_cases::UploadImageUseCase;
use crate::modules::project::application::domain::entities::{Project, ProjectForm};
use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectUseCase, CREATE_PROJECT_FAILED,
};
use crate::modules::project::application::ports::outgoing::ProjectApi;
use crate::shared::form::{FormController, FormError};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct CreateProjectService<A>
where
    A: ProjectApi,
{
    api: A,
    uploader: Arc<dyn UploadImageUseCase + Send + Sync>,
}

impl<A> CreateProjectService<A>
where
    A: ProjectApi,
{
    pub fn new(api: A, uploader: Arc<dyn UploadImageUseCase + Send + Sync>) -> Self {
        Self { api, uploader }
    }
}

#[async_trait]
impl<A> CreateProjectUseCase for CreateProjectService<A>
where
    A: ProjectApi + Send + Sync,
{
    async fn execute(
        &self,
        form: ProjectForm,
        thumbnail: Option<ImageFile>,
        credential: &Credential,
    ) -> Result<Option<Project>, FormError> {
        let mut controller = FormController::new(form, CREATE_PROJECT_FAILED);

        if let Some(file) = thumbnail {
            let uploader = Arc::clone(&self.uploader);
            controller
                .upload_into("thumbnail", async move {
                    uploader.execute(file).await.map(|image| image.secure_url)
                })
                .await;
        }

        let saved = controller
            .submit(|draft| async move { self.api.create(&draft, credential).await })
            .await?;

        info!("Project added by {}", credential.user_id());
        Ok(saved)
    }
}
