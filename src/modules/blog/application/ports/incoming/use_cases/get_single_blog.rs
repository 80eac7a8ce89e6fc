use async_trait::async_trait;

use crate::modules::blog::application::domain::entities::BlogPost;
use crate::shared::remote::RemoteError;

#[async_trait]
pub trait GetSingleBlogUseCase: Send + Sync {
    async fn execute(&self, id: &str) -> Result<BlogPost, RemoteError>;
}
