use async_trait::async_trait;
use tracing::info;

use crate::auth::application::domain::entities::Credential;
use crate::modules::experience::application::domain::entities::{
    Experience, ExperienceEditForm,
};
use crate::modules::experience::application::ports::incoming::use_cases::{
    UpdateExperienceUseCase, UPDATE_EXPERIENCE_FAILED,
};
use crate::modules::experience::application::ports::outgoing::ExperienceApi;
use crate::shared::form::{FormController, FormError};

pub struct UpdateExperienceService<A>
where
    A: ExperienceApi,
{
    api: A,
}

impl<A> UpdateExperienceService<A>
where
    A: ExperienceApi,
{
    pub fn new(api: A) -> Self {
        Self { api }
    }
}

#[async_trait]
impl<A> UpdateExperienceUseCase for UpdateExperienceService<A>
where
    A: ExperienceApi + Send + Sync,
{
    async fn execute(
        &self,
        id: &str,
        form: ExperienceEditForm,
        credential: &Credential,
    ) -> Result<Option<Experience>, FormError> {
        let mut controller = FormController::new(form, UPDATE_EXPERIENCE_FAILED);

        let saved = controller
            .submit(|draft| async move { self.api.update(id, &draft, credential).await })
            .await?;

        info!("Experience {} updated", id);
        Ok(saved)
    }
}
