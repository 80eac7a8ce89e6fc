use async_trait::async_trait;

use crate::modules::blog::application::domain::entities::BlogPost;
use crate::modules::blog::application::ports::incoming::use_cases::GetSingleBlogUseCase;
use crate::modules::blog::application::ports::outgoing::BlogApi;
use crate::shared::remote::RemoteError;

pub struct GetSingleBlogService<A>
where
    A: BlogApi,
{
    api: A,
}

impl<A> GetSingleBlogService<A>
where
    A: BlogApi,
{
    pub fn new(api: A) -> Self {
        Self { api }
    }
}

#[async_trait]
impl<A> GetSingleBlogUseCase for GetSingleBlogService<A>
where
    A: BlogApi + Send + Sync,
{
    async fn execute(&self, id: &str) -> Result<BlogPost, RemoteError> {
        self.api.get(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::api_mocks::MockBlogApi;
    use crate::tests::support::fixtures::sample_blog;

    #[tokio::test]
    async fn test_execute_fetches_by_id() {
        let mut api = MockBlogApi::new();
        api.expect_get()
            .withf(|id| id.to_string() == "b1")
            .times(1)
            .returning(|id| Ok(sample_blog(id)));

        let post = GetSingleBlogService::new(api).execute("b1").await.unwrap();
        assert_eq!(post.id, "b1");
    }
}
