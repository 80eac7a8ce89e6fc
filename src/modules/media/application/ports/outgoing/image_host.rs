use async_trait::async_trait;

use crate::modules::media::application::domain::entities::{ImageFile, UploadedImage};
use crate::shared::form::UPLOAD_FAILED_MESSAGE;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    /// The file was refused before anything was sent.
    #[error("{0}")]
    Policy(String),

    #[error("upload request failed: {0}")]
    Transport(String),

    #[error("image host rejected the upload ({status}): {}", .message.as_deref().unwrap_or("no message"))]
    Rejected { status: u16, message: Option<String> },

    #[error("image host response did not include secure_url")]
    MissingUrl,
}

impl UploadError {
    /// Policy problems are the user's to fix; everything else reads the same.
    pub fn user_message(&self) -> String {
        match self {
            UploadError::Policy(message) => message.clone(),
            _ => UPLOAD_FAILED_MESSAGE.to_string(),
        }
    }
}

#[async_trait]
pub trait ImageHost: Send + Sync {
    async fn upload(&self, file: ImageFile) -> Result<UploadedImage, UploadError>;
}
