use async_trait::async_trait;

use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::incoming::use_cases::GetProjectsUseCase;
use crate::modules::project::application::ports::outgoing::ProjectApi;
use crate::shared::remote::RemoteError;

pub struct GetProjectsService<A>
where
    A: ProjectApi,
{
    api: A,
}

impl<A> GetProjectsService<A>
where
    A: ProjectApi,
{
    pub fn new(api: A) -> Self {
        Self { api }
    }
}

#[async_trait]
impl<A> GetProjectsUseCase for GetProjectsService<A>
where
    A: ProjectApi + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Project>, RemoteError> {
        self.api.list().await
    }
}
