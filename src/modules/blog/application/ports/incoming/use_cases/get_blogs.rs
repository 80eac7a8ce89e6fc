use async_trait::async_trait;

use crate::modules::blog::application::domain::entities::BlogPost;
use crate::shared::remote::RemoteError;

pub const LOAD_BLOGS_FAILED: &str = "Failed to load blog data";

#[async_trait]
pub trait GetBlogsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<BlogPost>, RemoteError>;
}
