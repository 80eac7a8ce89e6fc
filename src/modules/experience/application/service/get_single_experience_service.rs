use async_trait::async_trait;

use crate::modules::experience::application::domain::entities::Experience;
use crate::modules::experience::application::ports::incoming::use_cases::GetSingleExperienceUseCase;
use crate::modules::experience::application::ports::outgoing::ExperienceApi;
use crate::shared::remote::RemoteError;

pub struct GetSingleExperienceService<A>
where
    A: ExperienceApi,
{
    api: A,
}

impl<A> GetSingleExperienceService<A>
where
    A: ExperienceApi,
{
    pub fn new(api: A) -> Self {
        Self { api }
    }
}

#[async_trait]
impl<A> GetSingleExperienceUseCase for GetSingleExperienceService<A>
where
    A: ExperienceApi + Send + Sync,
{
    async fn execute(&self, id: &str) -> Result<Experience, RemoteError> {
        self.api.get(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::api_mocks::MockExperienceApi;

    #[tokio::test]
    async fn test_execute_not_found() {
        let mut api = MockExperienceApi::new();
        api.expect_get()
            .withf(|id| id.to_string() == "missing")
            .returning(|_| Err(RemoteError::NotFound { message: None }));

        let err = GetSingleExperienceService::new(api)
            .execute("missing")
            .await
            .unwrap_err();
        assert_eq!(err, RemoteError::NotFound { message: None });
    }
}
