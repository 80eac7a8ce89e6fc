use async_trait::async_trait;

use crate::modules::media::application::domain::entities::{ImageFile, UploadedImage};
use crate::modules::media::application::ports::outgoing::UploadError;

#[async_trait]
pub trait UploadImageUseCase: Send + Sync {
    async fn execute(&self, file: ImageFile) -> Result<UploadedImage, UploadError>;
}
