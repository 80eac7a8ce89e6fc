use async_trait::async_trait;
use tracing::info;

use crate::auth::application::domain::entities::Credential;
use crate::modules::blog::application::ports::incoming::use_cases::DeleteBlogUseCase;
use crate::modules::blog::application::ports::outgoing::BlogApi;
use crate::shared::remote::RemoteError;

pub struct DeleteBlogService<A>
where
    A: BlogApi,
{
    api: A,
}

impl<A> DeleteBlogService<A>
where
    A: BlogApi,
{
    pub fn new(api: A) -> Self {
        Self { api }
    }
}

#[async_trait]
impl<A> DeleteBlogUseCase for DeleteBlogService<A>
where
    A: BlogApi + Send + Sync,
{
    async fn execute(&self, id: &str, credential: &Credential) -> Result<(), RemoteError> {
        self.api.delete(id, credential).await?;
        info!("Blog {} deleted by {}", id, credential.user_id());
        Ok(())
    }
}
