pub mod skill_api;

pub use skill_api::SkillApi;
