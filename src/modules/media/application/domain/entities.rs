use std::fmt;

use serde::Serialize;

use crate::modules::media::application::ports::outgoing::UploadError;
use crate::shared::config::DEFAULT_UPLOAD_MAX_BYTES;

/// Content types the image host accepts for portfolio images.
pub const ALLOWED_IMAGE_TYPES: &[&str] = &[
    "image/jpeg",
    "image/png",
    "image/gif",
    "image/webp",
    "image/svg+xml",
    "image/avif",
];

/// One file picked in a dashboard form.
#[derive(Clone, PartialEq)]
pub struct ImageFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes: bytes.into(),
        }
    }

    /// `image/png; charset=binary` -> `image/png`
    pub fn media_type(&self) -> String {
        self.content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase()
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for ImageFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageFile")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("size", &self.bytes.len())
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedImage {
    pub secure_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadPolicy {
    pub max_bytes: u64,
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_UPLOAD_MAX_BYTES,
        }
    }
}

impl UploadPolicy {
    pub fn new(max_bytes: u64) -> Self {
        Self { max_bytes }
    }

    pub fn check(&self, file: &ImageFile) -> Result<(), UploadError> {
        if file.file_name.trim().is_empty() {
            return Err(UploadError::Policy("File name is required".to_string()));
        }

        if !ALLOWED_IMAGE_TYPES.contains(&file.media_type().as_str()) {
            return Err(UploadError::Policy(
                "Only image files can be uploaded".to_string(),
            ));
        }

        if file.bytes.is_empty() {
            return Err(UploadError::Policy("File is empty".to_string()));
        }

        if file.size() > self.max_bytes {
            return Err(UploadError::Policy(format!(
                "Image must be {} or smaller",
                human_size(self.max_bytes)
            )));
        }

        Ok(())
    }
}

fn human_size(bytes: u64) -> String {
    const MB: u64 = 1024 * 1024;
    if bytes >= MB && bytes % MB == 0 {
        format!("{}MB", bytes / MB)
    } else if bytes >= 1024 && bytes % 1024 == 0 {
        format!("{}KB", bytes / 1024)
    } else {
        format!("{} bytes", bytes)
    }
}
