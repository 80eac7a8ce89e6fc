pub mod experience_api_http;

pub use experience_api_http::ExperienceApiHttp;
