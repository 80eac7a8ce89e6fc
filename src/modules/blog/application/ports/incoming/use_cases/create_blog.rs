use async_trait::async_trait;

use crate::auth::application::domain::entities::Credential;
use crate::modules::blog::application::domain::entities::{BlogForm, BlogPost};
use crate::shared::form::FormError;

pub const BLOG_CREATED: &str = "Blog created successfully!";
pub const CREATE_BLOG_FAILED: &str = "Failed to create blog";
pub const BLOG_LIST_PAGE: &str = "/dashboard/blog";

#[async_trait]
pub trait CreateBlogUseCase: Send + Sync {
    async fn execute(
        &self,
        form: BlogForm,
        credential: &Credential,
    ) -> Result<Option<BlogPost>, FormError>;
}
