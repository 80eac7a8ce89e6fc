use async_trait::async_trait;

use crate::auth::application::domain::entities::Credential;
use crate::modules::skill::application::domain::entities::{Skill, SkillDraft};
use crate::shared::remote::RemoteError;

#[async_trait]
pub trait SkillApi: Send + Sync {
    async fn list(&self) -> Result<Vec<Skill>, RemoteError>;

    async fn create(
        &self,
        draft: &SkillDraft,
        credential: &Credential,
    ) -> Result<Option<Skill>, RemoteError>;

    async fn delete(&self, id: &str, credential: &Credential) -> Result<(), RemoteError>;
}
