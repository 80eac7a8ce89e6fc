mod create_blog;
mod delete_blog;
mod get_blogs;
mod get_single_blog;
mod update_blog;

pub use create_blog::{CreateBlogUseCase, BLOG_CREATED, BLOG_LIST_PAGE, CREATE_BLOG_FAILED};
pub use delete_blog::{DeleteBlogUseCase, BLOG_DELETED, DELETE_BLOG_FAILED};
pub use get_blogs::{GetBlogsUseCase, LOAD_BLOGS_FAILED};
pub use get_single_blog::GetSingleBlogUseCase;
pub use update_blog::{UpdateBlogUseCase, BLOG_UPDATED, DASHBOARD_HOME, UPDATE_BLOG_FAILED};
