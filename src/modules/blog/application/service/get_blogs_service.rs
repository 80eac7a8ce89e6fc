use async_trait::async_trait;

use crate::modules::blog::application::domain::entities::BlogPost;
use crate::modules::blog::application::ports::incoming::use_cases::GetBlogsUseCase;
use crate::modules::blog::application::ports::outgoing::BlogApi;
use crate::shared::remote::RemoteError;

pub struct GetBlogsService<A>
where
    A: BlogApi,
{
    api: A,
}

impl<A> GetBlogsService<A>
where
    A: BlogApi,
{
    pub fn new(api: A) -> Self {
        Self { api }
    }
}

#[async_trait]
impl<A> GetBlogsUseCase for GetBlogsService<A>
where
    A: BlogApi + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<BlogPost>, RemoteError> {
        self.api.list().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::api_mocks::MockBlogApi;

    #[tokio::test]
    async fn test_empty_collection() {
        let mut api = MockBlogApi::new();
        api.expect_list().times(1).returning(|| Ok(vec![]));

        assert!(GetBlogsService::new(api).execute().await.unwrap().is_empty());
    }
}
