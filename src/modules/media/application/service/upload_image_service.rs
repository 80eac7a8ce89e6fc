use async_trait::async_trait;
use tracing::{info, warn};

use crate::modules::media::application::domain::entities::{
    ImageFile, UploadPolicy, UploadedImage,
};
use crate::modules::media::application::ports::incoming::use_cases::UploadImageUseCase;
use crate::modules::media::application::ports::outgoing::{ImageHost, UploadError};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct UploadImageService<H>
where
    H: ImageHost,
{
    host: H,
    policy: UploadPolicy,
}

impl<H> UploadImageService<H>
where
    H: ImageHost,
{
    pub fn new(host: H, policy: UploadPolicy) -> Self {
        Self { host, policy }
    }
}

#[async_trait]
impl<H> UploadImageUseCase for UploadImageService<H>
where
    H: ImageHost + Send + Sync,
{
    async fn execute(&self, file: ImageFile) -> Result<UploadedImage, UploadError> {
        self.policy.check(&file)?;

        let name = file.file_name.clone();
        let size = file.size();
        match self.host.upload(file).await {
            Ok(uploaded) => {
                info!("Uploaded '{}' ({} bytes) to {}", name, size, uploaded.secure_url);
                Ok(uploaded)
            }
            Err(e) => {
                warn!("Upload of '{}' failed: {}", name, e);
                Err(e)
            }
        }
    }
}
