mod create_skill;
mod delete_skill;
mod get_skills;

pub use create_skill::{create_skill_handler, create_skill_with_icon_handler};
pub use delete_skill::delete_skill_handler;
pub use get_skills::get_skills_handler;
