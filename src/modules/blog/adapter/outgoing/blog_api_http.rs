use async_trait::async_trait;

use crate::auth::application::domain::entities::Credential;
use crate::modules::blog::application::domain::entities::{BlogDraft, BlogFields, BlogPost};
use crate::modules::blog::application::ports::outgoing::BlogApi;
use crate::shared::remote::{ApiClient, RemoteError, ResourceClient};

pub const BLOG_COLLECTION: &str = "blogs";

#[derive(Clone)]
pub struct BlogApiHttp {
    client: ResourceClient<BlogPost>,
}

impl BlogApiHttp {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: ResourceClient::new(api, BLOG_COLLECTION),
        }
    }
}

#[async_trait]
impl BlogApi for BlogApiHttp {
    async fn list(&self) -> Result<Vec<BlogPost>, RemoteError> {
        self.client.list(None).await
    }

    async fn get(&self, id: &str) -> Result<BlogPost, RemoteError> {
        self.client.get(id, None).await
    }

    async fn create(
        &self,
        draft: &BlogDraft,
        credential: &Credential,
    ) -> Result<Option<BlogPost>, RemoteError> {
        self.client.create(draft, credential).await
    }

    async fn update(
        &self,
        id: &str,
        fields: &BlogFields,
        credential: &Credential,
    ) -> Result<Option<BlogPost>, RemoteError> {
        self.client.update(id, fields, credential).await
    }

    async fn delete(&self, id: &str, credential: &Credential) -> Result<(), RemoteError> {
        self.client.delete(id, credential).await
    }
}
