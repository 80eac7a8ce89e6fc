use async_trait::async_trait;
use tracing::info;

use crate::auth::application::domain::entities::Credential;
use crate::modules::experience::application::ports::incoming::use_cases::DeleteExperienceUseCase;
use crate::modules::experience::application::ports::outgoing::ExperienceApi;
use crate::shared::remote::RemoteError;

pub struct DeleteExperienceService<A>
where
    A: ExperienceApi,
{
    api: A,
}

impl<A> DeleteExperienceService<A>
where
    A: ExperienceApi,
{
    pub fn new(api: A) -> Self {
        Self { api }
    }
}

#[async_trait]
impl<A> DeleteExperienceUseCase for DeleteExperienceService<A>
where
    A: ExperienceApi + Send + Sync,
{
    async fn execute(&self, id: &str, credential: &Credential) -> Result<(), RemoteError> {
        self.api.delete(id, credential).await?;
        info!("Experience {} deleted", id);
        Ok(())
    }
}
