pub mod project_api;

pub use project_api::ProjectApi;
