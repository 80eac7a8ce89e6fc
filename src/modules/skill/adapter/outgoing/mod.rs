pub mod skill_api_http;

pub use skill_api_http::SkillApiHttp;
