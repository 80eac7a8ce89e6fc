use async_trait::async_trait;

use crate::auth::application::domain::entities::Credential;
use crate::modules::project::application::domain::entities::{
    Project, ProjectDraft, ProjectPatch,
};
use crate::modules::project::application::ports::outgoing::ProjectApi;
use crate::shared::remote::{ApiClient, RemoteError, ResourceClient};

pub const PROJECT_COLLECTION: &str = "project";

#[derive(Clone)]
pub struct ProjectApiHttp {
    client: ResourceClient<Project>,
}

impl ProjectApiHttp {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: ResourceClient::new(api, PROJECT_COLLECTION),
        }
    }
}

#[async_trait]
impl ProjectApi for ProjectApiHttp {
    async fn list(&self) -> Result<Vec<Project>, RemoteError> {
        self.client.list(None).await
    }

    async fn get(&self, id: &str) -> Result<Project, RemoteError> {
        self.client.get(id, None).await
    }

    async fn create(
        &self,
        draft: &ProjectDraft,
        credential: &Credential,
    ) -> Result<Option<Project>, RemoteError> {
        self.client.create(draft, credential).await
    }

    async fn update(
        &self,
        id: &str,
        patch: &ProjectPatch,
        credential: &Credential,
    ) -> Result<Option<Project>, RemoteError> {
        self.client.update(id, patch, credential).await
    }

    async fn delete(&self, id: &str, credential: &Credential) -> Result<(), RemoteError> {
        self.client.delete(id, credential).await
    }
}
