use async_trait::async_trait;

use crate::modules::experience::application::domain::entities::Experience;
use crate::shared::remote::RemoteError;

#[async_trait]
pub trait GetSingleExperienceUseCase: Send + Sync {
    async fn execute(&self, id: &str) -> Result<Experience, RemoteError>;
}
