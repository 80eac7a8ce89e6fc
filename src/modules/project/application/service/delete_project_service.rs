use async_trait::async_trait;
use tracing::info;

use crate::auth::application::domain::entities::Credential;
use crate::modules::project::application::ports::incoming::use_cases::DeleteProjectUseCase;
use crate::modules::project::application::ports::outgoing::ProjectApi;
use crate::shared::remote::RemoteError;

pub struct DeleteProjectService<A>
where
    A: ProjectApi,
{
    api: A,
}

impl<A> DeleteProjectService<A>
where
    A: ProjectApi,
{
    pub fn new(api: A) -> Self {
        Self { api }
    }
}

#[async_trait]
impl<A> DeleteProjectUseCase for DeleteProjectService<A>
where
    A: ProjectApi + Send + Sync,
{
    async fn execute(&self, id: &str, credential: &Credential) -> Result<(), RemoteError> {
        self.api.delete(id, credential).await?;
        info!("Project {} deleted by {}", id, credential.user_id());
        Ok(())
    }
}
