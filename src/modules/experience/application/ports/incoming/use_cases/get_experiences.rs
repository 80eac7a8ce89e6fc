use async_trait::async_trait;

use crate::modules::experience::application::domain::entities::Experience;
use crate::shared::remote::RemoteError;

pub const LOAD_EXPERIENCES_FAILED: &str = "Failed to load experience data";

#[async_trait]
pub trait GetExperiencesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Experience>, RemoteError>;
}
