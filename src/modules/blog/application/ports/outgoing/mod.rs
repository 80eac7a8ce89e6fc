pub mod blog_api;

pub use blog_api::BlogApi;
