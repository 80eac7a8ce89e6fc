use async_trait::async_trait;

use crate::modules::skill::application::domain::entities::Skill;
use crate::shared::remote::RemoteError;

pub const LOAD_SKILLS_FAILED: &str = "Failed to load skill data";

#[async_trait]
pub trait GetSkillsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Skill>, RemoteError>;
}
