use async_trait::async_trait;

use crate::modules::experience::application::domain::entities::Experience;
use crate::modules::experience::application::ports::incoming::use_cases::GetExperiencesUseCase;
use crate::modules::experience::application::ports::outgoing::ExperienceApi;
use crate::shared::remote::RemoteError;

pub struct GetExperiencesService<A>
where
    A: ExperienceApi,
{
    api: A,
}

impl<A> GetExperiencesService<A>
where
    A: ExperienceApi,
{
    pub fn new(api: A) -> Self {
        Self { api }
    }
}

#[async_trait]
impl<A> GetExperiencesUseCase for GetExperiencesService<A>
where
    A: ExperienceApi + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Experience>, RemoteError> {
        self.api.list().await
    }
}
