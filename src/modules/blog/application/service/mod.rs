pub mod create_blog_service;
pub mod delete_blog_service;
pub mod get_blogs_service;
pub mod get_single_blog_service;
pub mod update_blog_service;

pub use create_blog_service::CreateBlogService;
pub use delete_blog_service::DeleteBlogService;
pub use get_blogs_service::GetBlogsService;
pub use get_single_blog_service::GetSingleBlogService;
pub use update_blog_service::UpdateBlogService;
