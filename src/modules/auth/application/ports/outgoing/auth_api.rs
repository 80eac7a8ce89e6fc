use async_trait::async_trait;

use crate::shared::remote::RemoteError;

/// Login endpoint of the external portfolio API.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchanges credentials for the API's bearer token.
    async fn login(&self, email: &str, password: &str) -> Result<String, RemoteError>;
}
