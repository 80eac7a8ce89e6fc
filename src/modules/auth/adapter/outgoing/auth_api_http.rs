use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::auth::application::ports::outgoing::AuthApi;
use crate::shared::remote::{ApiClient, RemoteError};

#[derive(Serialize)]
struct LoginBody<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct LoginData {
    #[serde(default)]
    token: Option<String>,
}

/// `POST /api/auth/login`.
#[derive(Clone)]
pub struct AuthApiHttp {
    api: ApiClient,
}

impl AuthApiHttp {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl AuthApi for AuthApiHttp {
    async fn login(&self, email: &str, password: &str) -> Result<String, RemoteError> {
        let data: Option<LoginData> = self
            .api
            .post(&["auth", "login"], &LoginBody { email, password }, None)
            .await?;

        let token = data
            .and_then(|d| d.token)
            .filter(|t| !t.is_empty())
            .ok_or(RemoteError::Rejected { message: None })?;

        info!("Login accepted by API for {}", email);
        Ok(token)
    }
}
