use async_trait::async_trait;

use crate::auth::application::domain::entities::Credential;
use crate::modules::blog::application::domain::entities::{BlogForm, BlogPost};
use crate::shared::form::FormError;

pub const BLOG_UPDATED: &str = "Blog updated successfully!";
pub const UPDATE_BLOG_FAILED: &str = "Failed to update blog";
pub const DASHBOARD_HOME: &str = "/dashboard";

#[async_trait]
pub trait UpdateBlogUseCase: Send + Sync {
    async fn execute(
        &self,
        id: &str,
        form: BlogForm,
        credential: &Credential,
    ) -> Result<Option<BlogPost>, FormError>;
}
