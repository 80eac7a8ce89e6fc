use async_trait::async_trait;
use tracing::info;

use crate::auth::application::domain::entities::Credential;
use crate::modules::experience::application::domain::entities::{Experience, ExperienceForm};
use crate::modules::experience::application::ports::incoming::use_cases::{
    CreateExperienceUseCase, CREATE_EXPERIENCE_FAILED,
};
use crate::modules::experience::application::ports::outgoing::ExperienceApi;
use crate::shared::form::{FormController, FormError};

pub struct CreateExperienceService<A>
where
    A: ExperienceApi,
{
    api: A,
}

impl<A> CreateExperienceService<A>
where
    A: ExperienceApi,
{
    pub fn new(api: A) -> Self {
        Self { api }
    }
}

#[async_trait]
impl<A> CreateExperienceUseCase for CreateExperienceService<A>
where
    A: ExperienceApi + Send + Sync,
{
    async fn execute(
        &self,
        form: ExperienceForm,
        credential: &Credential,
    ) -> Result<Option<Experience>, FormError> {
        let mut controller = FormController::new(form, CREATE_EXPERIENCE_FAILED);

        let saved = controller
            .submit(|draft| async move { self.api.create(&draft, credential).await })
            .await?;

        info!("Experience submitted by {}", credential.user_id());
        Ok(saved)
    }
}
