use async_trait::async_trait;

use crate::auth::application::domain::entities::Credential;
use crate::modules::project::application::domain::entities::{
    Project, ProjectDraft, ProjectPatch,
};
use crate::shared::remote::RemoteError;

/// `/api/project` on the portfolio API. Reads are public; writes carry the
/// caller's credential.
#[async_trait]
pub trait ProjectApi: Send + Sync {
    async fn list(&self) -> Result<Vec<Project>, RemoteError>;

    async fn get(&self, id: &str) -> Result<Project, RemoteError>;

    async fn create(
        &self,
        draft: &ProjectDraft,
        credential: &Credential,
    ) -> Result<Option<Project>, RemoteError>;

    async fn update(
        &self,
        id: &str,
        patch: &ProjectPatch,
        credential: &Credential,
    ) -> Result<Option<Project>, RemoteError>;

    async fn delete(&self, id: &str, credential: &Credential) -> Result<(), RemoteError>;
}
