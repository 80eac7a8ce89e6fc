use async_trait::async_trait;

use crate::auth::application::domain::entities::Credential;
use crate::modules::blog::application::domain::entities::{BlogDraft, BlogFields, BlogPost};
use crate::shared::remote::RemoteError;

#[async_trait]
pub trait BlogApi: Send + Sync {
    async fn list(&self) -> Result<Vec<BlogPost>, RemoteError>;

    async fn get(&self, id: &str) -> Result<BlogPost, RemoteError>;

    async fn create(
        &self,
        draft: &BlogDraft,
        credential: &Credential,
    ) -> Result<Option<BlogPost>, RemoteError>;

    async fn update(
        &self,
        id: &str,
        fields: &BlogFields,
        credential: &Credential,
    ) -> Result<Option<BlogPost>, RemoteError>;

    async fn delete(&self, id: &str, credential: &Credential) -> Result<(), RemoteError>;
}
