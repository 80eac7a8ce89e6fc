use async_trait::async_trait;

use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::incoming::use_cases::GetSingleProjectUseCase;
use crate::modules::project::application::ports::outgoing::ProjectApi;
use crate::shared::remote::RemoteError;

pub struct GetSingleProjectService<A>
where
    A: ProjectApi,
{
    api: A,
}

impl<A> GetSingleProjectService<A>
where
    A: ProjectApi,
{
    pub fn new(api: A) -> Self {
        Self { api }
    }
}

#[async_trait]
impl<A> GetSingleProjectUseCase for GetSingleProjectService<A>
where
    A: ProjectApi + Send + Sync,
{
    async fn execute(&self, id: &str) -> Result<Project, RemoteError> {
        self.api.get(id).await
    }
}
