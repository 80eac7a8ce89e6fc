use std::sync::Arc;

use crate::modules::skill::application::ports::incoming::use_cases::{
    CreateSkillUseCase, DeleteSkillUseCase, GetSkillsUseCase,
};

/// Skills have no edit page.
#[derive(Clone)]
pub struct SkillUseCases {
    pub create: Arc<dyn CreateSkillUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetSkillsUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteSkillUseCase + Send + Sync>,
}
