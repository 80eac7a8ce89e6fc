use async_trait::async_trait;
use tracing::info;

use crate::auth::application::domain::entities::Credential;
use crate::modules::blog::application::domain::entities::{BlogDraft, BlogForm, BlogPost};
use crate::modules::blog::application::ports::incoming::use_cases::{
    CreateBlogUseCase, CREATE_BLOG_FAILED,
};
use crate::modules::blog::application::ports::outgoing::BlogApi;
use crate::shared::form::{FormController, FormError};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct CreateBlogService<A>
where
    A: BlogApi,
{
    api: A,
}

impl<A> CreateBlogService<A>
where
    A: BlogApi,
{
    pub fn new(api: A) -> Self {
        Self { api }
    }
}

#[async_trait]
impl<A> CreateBlogUseCase for CreateBlogService<A>
where
    A: BlogApi + Send + Sync,
{
    async fn execute(
        &self,
        form: BlogForm,
        credential: &Credential,
    ) -> Result<Option<BlogPost>, FormError> {
        let mut controller = FormController::new(form, CREATE_BLOG_FAILED);

        let saved = controller
            .submit(|fields| async move {
                let draft = BlogDraft::new(fields, credential.user_id());
                self.api.create(&draft, credential).await
            })
            .await?;

        info!("Blog created by {}", credential.user_id());
        Ok(saved)
    }
}
