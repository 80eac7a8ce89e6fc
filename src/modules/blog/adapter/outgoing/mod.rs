pub mod blog_api_http;

pub use blog_api_http::BlogApiHttp;
