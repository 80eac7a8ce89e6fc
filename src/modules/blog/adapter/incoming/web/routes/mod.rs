mod create_blog;
mod delete_blog;
mod get_blogs;
mod get_single_blog;
mod update_blog;

pub use create_blog::create_blog_handler;
pub use delete_blog::delete_blog_handler;
pub use get_blogs::get_blogs_handler;
pub use get_single_blog::get_single_blog_handler;
pub use update_blog::update_blog_handler;
