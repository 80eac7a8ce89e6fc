pub mod experience_api;

pub use experience_api::ExperienceApi;
