use async_trait::async_trait;

use crate::auth::application::domain::entities::Credential;
use crate::shared::remote::RemoteError;

pub const BLOG_DELETED: &str = "Blog deleted successfully";
pub const DELETE_BLOG_FAILED: &str = "Failed to delete blog";

#[async_trait]
pub trait DeleteBlogUseCase: Send + Sync {
    async fn execute(&self, id: &str, credential: &Credential) -> Result<(), RemoteError>;
}
