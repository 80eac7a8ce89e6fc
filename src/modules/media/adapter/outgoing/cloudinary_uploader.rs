use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use tracing::debug;

use crate::modules::media::application::domain::entities::{ImageFile, UploadedImage};
use crate::modules::media::application::ports::outgoing::{ImageHost, UploadError};

/// Unsigned uploads to Cloudinary: the file plus a preset, nothing else.
#[derive(Clone)]
pub struct CloudinaryUploader {
    http: reqwest::Client,
    upload_url: String,
    upload_preset: String,
}

impl CloudinaryUploader {
    pub fn new(
        http: reqwest::Client,
        upload_url: impl Into<String>,
        upload_preset: impl Into<String>,
    ) -> Self {
        Self {
            http,
            upload_url: upload_url.into(),
            upload_preset: upload_preset.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct UploadReply {
    #[serde(default)]
    secure_url: Option<String>,
}

/// `{"error": {"message": "..."}}`
#[derive(Debug, Default, Deserialize)]
struct HostErrorBody {
    #[serde(default)]
    error: Option<HostError>,
}

#[derive(Debug, Default, Deserialize)]
struct HostError {
    #[serde(default)]
    message: Option<String>,
}

#[async_trait]
impl ImageHost for CloudinaryUploader {
    async fn upload(&self, file: ImageFile) -> Result<UploadedImage, UploadError> {
        let part = Part::bytes(file.bytes)
            .file_name(file.file_name)
            .mime_str(&file.content_type)
            .map_err(|e| UploadError::Transport(e.to_string()))?;

        let form = Form::new()
            .part("file", part)
            .text("upload_preset", self.upload_preset.clone());

        debug!("POST {} (multipart)", self.upload_url);
        let response = self
            .http
            .post(&self.upload_url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| UploadError::Transport(e.to_string()))?;

        let status = response.status();
        let raw = response
            .text()
            .await
            .map_err(|e| UploadError::Transport(e.to_string()))?;

        if !status.is_success() {
            let body: HostErrorBody = serde_json::from_str(&raw).unwrap_or_default();
            return Err(UploadError::Rejected {
                status: status.as_u16(),
                message: body.error.and_then(|e| e.message),
            });
        }

        let reply: UploadReply =
            serde_json::from_str(&raw).map_err(|_| UploadError::MissingUrl)?;

        reply
            .secure_url
            .filter(|url| !url.trim().is_empty())
            .map(|secure_url| UploadedImage { secure_url })
            .ok_or(UploadError::MissingUrl)
    }
}
