use std::env;
use std::time::Duration;

use anyhow::Context;

/// Portfolio API the dashboard manages content for.
pub const DEFAULT_API_BASE_URL: &str = "https://portfolio-server-mocha-omega.vercel.app";

/// Image host the upload adapter posts to.
pub const DEFAULT_UPLOAD_URL: &str = "https://api.cloudinary.com/v1_1/dbtskylxt/image/upload";

pub const DEFAULT_UPLOAD_PRESET: &str = "blogImage";

pub const DEFAULT_UPLOAD_MAX_BYTES: u64 = 5 * 1024 * 1024; // 5MB

pub const DEFAULT_SESSION_IDLE_SECS: u64 = 8 * 60 * 60;

#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub host: String,
    pub port: u16,
    pub api_base_url: String,
    pub upload_url: String,
    pub upload_preset: String,
    pub upload_max_bytes: u64,
    /// Idle time after which a dashboard session is dropped.
    pub session_idle_ttl: Duration,
}

impl DashboardConfig {
    /// Reads `HOST`, `PORT`, `API_BASE_URL`, `UPLOAD_URL`, `UPLOAD_PRESET`,
    /// `UPLOAD_MAX_BYTES` and `SESSION_IDLE_SECS`. Unset or blank values fall
    /// back to the defaults.
    pub fn from_env() -> anyhow::Result<Self> {
        let port = env_or("PORT", "8080")
            .parse::<u16>()
            .context("PORT must be a valid port number")?;

        let upload_max_bytes = match env_value("UPLOAD_MAX_BYTES") {
            Some(raw) => raw
                .parse::<u64>()
                .context("UPLOAD_MAX_BYTES must be a number of bytes")?,
            None => DEFAULT_UPLOAD_MAX_BYTES,
        };

        let session_idle_secs = match env_value("SESSION_IDLE_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .context("SESSION_IDLE_SECS must be a number of seconds")?,
            None => DEFAULT_SESSION_IDLE_SECS,
        };

        Ok(Self {
            host: env_or("HOST", "127.0.0.1"),
            port,
            api_base_url: trim_base_url(&env_or("API_BASE_URL", DEFAULT_API_BASE_URL)),
            upload_url: env_or("UPLOAD_URL", DEFAULT_UPLOAD_URL),
            upload_preset: env_or("UPLOAD_PRESET", DEFAULT_UPLOAD_PRESET),
            upload_max_bytes,
            session_idle_ttl: Duration::from_secs(session_idle_secs),
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn env_value(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.trim().is_empty())
}

fn env_or(key: &str, default: &str) -> String {
    env_value(key).unwrap_or_else(|| default.to_string())
}

fn trim_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
