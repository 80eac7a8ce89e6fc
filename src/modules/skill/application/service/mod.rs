pub mod create_skill_service;
pub mod delete_skill_service;
pub mod get_skills_service;

pub use create_skill_service::CreateSkillService;
pub use delete_skill_service::DeleteSkillService;
pub use get_skills_service::GetSkillsService;
