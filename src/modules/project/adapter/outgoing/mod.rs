pub mod project_api_http;

pub use project_api_http::ProjectApiHttp;
