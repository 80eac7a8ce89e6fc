use async_trait::async_trait;

use crate::auth::application::domain::entities::Credential;
use crate::modules::media::application::domain::entities::ImageFile;
use crate::modules::skill::application::domain::entities::{Skill, SkillForm};
use crate::shared::form::FormError;

pub const SKILL_CREATED: &str = "Skill added successfully";
pub const CREATE_SKILL_FAILED: &str = "Failed to add skill";
pub const SKILLS_PAGE: &str = "/dashboard/skill";

#[async_trait]
pub trait CreateSkillUseCase: Send + Sync {
    /// Uploads `icon` first when given; its URL replaces the form's.
    async fn execute(
        &self,
        form: SkillForm,
        icon: Option<ImageFile>,
        credential: &Credential,
    ) -> Result<Option<Skill>, FormError>;
}
