use async_trait::async_trait;
use tracing::info;

use crate::auth::application::domain::entities::Credential;
use crate::modules::blog::application::domain::entities::{BlogForm, BlogPost};
use crate::modules::blog::application::ports::incoming::use_cases::{
    UpdateBlogUseCase, UPDATE_BLOG_FAILED,
};
use crate::modules::blog::application::ports::outgoing::BlogApi;
use crate::shared::form::{FormController, FormError};

pub struct UpdateBlogService<A>
where
    A: BlogApi,
{
    api: A,
}

impl<A> UpdateBlogService<A>
where
    A: BlogApi,
{
    pub fn new(api: A) -> Self {
        Self { api }
    }
}

#[async_trait]
impl<A> UpdateBlogUseCase for UpdateBlogService<A>
where
    A: BlogApi + Send + Sync,
{
    async fn execute(
        &self,
        id: &str,
        form: BlogForm,
        credential: &Credential,
    ) -> Result<Option<BlogPost>, FormError> {
        let mut controller = FormController::new(form, UPDATE_BLOG_FAILED);

        let saved = controller
            .submit(|fields| async move { self.api.update(id, &fields, credential).await })
            .await?;

        info!("Blog {} updated", id);
        Ok(saved)
    }
}
