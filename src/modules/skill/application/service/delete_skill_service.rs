use async_trait::async_trait;
use tracing::info;

use crate::auth::application::domain::entities::Credential;
use crate::modules::skill::application::ports::incoming::use_cases::DeleteSkillUseCase;
use crate::modules::skill::application::ports::outgoing::SkillApi;
use crate::shared::remote::RemoteError;

pub struct DeleteSkillService<A>
where
    A: SkillApi,
{
    api: A,
}

impl<A> DeleteSkillService<A>
where
    A: SkillApi,
{
    pub fn new(api: A) -> Self {
        Self { api }
    }
}

#[async_trait]
impl<A> DeleteSkillUseCase for DeleteSkillService<A>
where
    A: SkillApi + Send + Sync,
{
    async fn execute(&self, id: &str, credential: &Credential) -> Result<(), RemoteError> {
        self.api.delete(id, credential).await?;
        info!("Skill {} deleted", id);
        Ok(())
    }
}
