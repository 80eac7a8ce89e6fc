use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::auth::application::domain::entities::Credential;
use crate::modules::media::application::domain::entities::ImageFile;
use crate::modules::media::application::ports::incoming::use_cases::UploadImageUseCase;
use crate::modules::skill::application::domain::entities::{Skill, SkillForm};
use crate::modules::skill::application::ports::incoming::use_cases::{
    CreateSkillUseCase, CREATE_SKILL_FAILED,
};
use crate::modules::skill::application::ports::outgoing::SkillApi;
use crate::shared::form::{FormController, FormError};

pub struct CreateSkillService<A>
where
    A: SkillApi,
{
    api: A,
    uploader: Arc<dyn UploadImageUseCase + Send + Sync>,
}

impl<A> CreateSkillService<A>
where
    A: SkillApi,
{
    pub fn new(api: A, uploader: Arc<dyn UploadImageUseCase + Send + Sync>) -> Self {
        Self { api, uploader }
    }
}

#[async_trait]
impl<A> CreateSkillUseCase for CreateSkillService<A>
where
    A: SkillApi + Send + Sync,
{
    async fn execute(
        &self,
        form: SkillForm,
        icon: Option<ImageFile>,
        credential: &Credential,
    ) -> Result<Option<Skill>, FormError> {
        let mut controller = FormController::new(form, CREATE_SKILL_FAILED);

        if let Some(file) = icon {
            let uploader = Arc::clone(&self.uploader);
            controller
                .upload_into("icon", async move {
                    uploader.execute(file).await.map(|image| image.secure_url)
                })
                .await;
        }

        let saved = controller
            .submit(|draft| async move { self.api.create(&draft, credential).await })
            .await?;

        info!("Skill added by {}", credential.user_id());
        Ok(saved)
    }
}
