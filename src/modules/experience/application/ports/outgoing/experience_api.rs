use async_trait::async_trait;

use crate::auth::application::domain::entities::Credential;
use crate::modules::experience::application::domain::entities::{Experience, ExperienceDraft};
use crate::shared::remote::RemoteError;

#[async_trait]
pub trait ExperienceApi: Send + Sync {
    async fn list(&self) -> Result<Vec<Experience>, RemoteError>;

    async fn get(&self, id: &str) -> Result<Experience, RemoteError>;

    async fn create(
        &self,
        draft: &ExperienceDraft,
        credential: &Credential,
    ) -> Result<Option<Experience>, RemoteError>;

    async fn update(
        &self,
        id: &str,
        draft: &ExperienceDraft,
        credential: &Credential,
    ) -> Result<Option<Experience>, RemoteError>;

    async fn delete(&self, id: &str, credential: &Credential) -> Result<(), RemoteError>;
}
