use async_trait::async_trait;

use crate::modules::skill::application::domain::entities::Skill;
use crate::modules::skill::application::ports::incoming::use_cases::GetSkillsUseCase;
use crate::modules::skill::application::ports::outgoing::SkillApi;
use crate::shared::remote::RemoteError;

pub struct GetSkillsService<A>
where
    A: SkillApi,
{
    api: A,
}

impl<A> GetSkillsService<A>
where
    A: SkillApi,
{
    pub fn new(api: A) -> Self {
        Self { api }
    }
}

#[async_trait]
impl<A> GetSkillsUseCase for GetSkillsService<A>
where
    A: SkillApi + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Skill>, RemoteError> {
        self.api.list().await
    }
}
