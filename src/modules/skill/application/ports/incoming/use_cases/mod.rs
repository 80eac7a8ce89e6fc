mod create_skill;
mod delete_skill;
mod get_skills;

pub use create_skill::{CreateSkillUseCase, CREATE_SKILL_FAILED, SKILLS_PAGE, SKILL_CREATED};
pub use delete_skill::{DeleteSkillUseCase, DELETE_SKILL_FAILED, SKILL_DELETED};
pub use get_skills::{GetSkillsUseCase, LOAD_SKILLS_FAILED};
