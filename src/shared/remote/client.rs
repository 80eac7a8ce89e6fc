use std::marker::PhantomData;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::auth::application::domain::entities::Credential;
use crate::shared::remote::{Envelope, ErrorBody, RemoteError};

/// HTTP access to the portfolio API under `{base_url}/api/...`.
///
/// Every request carries `Content-Type: application/json`; a bearer token is
/// attached only when the caller passes a credential.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Reuses an existing client so all adapters share one connection pool.
    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// `["project", id]` → `{base_url}/api/project/{id}`, each segment
    /// percent-encoded.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, RemoteError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| RemoteError::Transport(format!("invalid API base url: {}", e)))?;

        url.path_segments_mut()
            .map_err(|_| RemoteError::Transport("API base url cannot take a path".to_string()))?
            .pop_if_empty()
            .push("api")
            .extend(segments);

        Ok(url)
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        credential: Option<&Credential>,
    ) -> Result<Option<T>, RemoteError> {
        let req = self.request(Method::GET, segments, credential)?;
        self.execute(req).await
    }

    pub async fn post<B, T>(
        &self,
        segments: &[&str],
        body: &B,
        credential: Option<&Credential>,
    ) -> Result<Option<T>, RemoteError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let req = self.request(Method::POST, segments, credential)?.json(body);
        self.execute(req).await
    }

    pub async fn patch<B, T>(
        &self,
        segments: &[&str],
        body: &B,
        credential: Option<&Credential>,
    ) -> Result<Option<T>, RemoteError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let req = self.request(Method::PATCH, segments, credential)?.json(body);
        self.execute(req).await
    }

    pub async fn delete(
        &self,
        segments: &[&str],
        credential: Option<&Credential>,
    ) -> Result<(), RemoteError> {
        let req = self.request(Method::DELETE, segments, credential)?;
        self.execute::<Value>(req).await.map(|_| ())
    }

    fn request(
        &self,
        method: Method,
        segments: &[&str],
        credential: Option<&Credential>,
    ) -> Result<RequestBuilder, RemoteError> {
        let url = self.endpoint(segments)?;
        debug!("{} {}", method, url);

        let mut req = self
            .http
            .request(method, url)
            .header(CONTENT_TYPE, "application/json");

        if let Some(credential) = credential {
            req = req.bearer_auth(credential.token());
        }

        Ok(req)
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        req: RequestBuilder,
    ) -> Result<Option<T>, RemoteError> {
        let response = req.send().await?;
        let status = response.status();
        let raw = response.text().await?;

        if status == StatusCode::NOT_FOUND {
            return Err(RemoteError::NotFound {
                message: ErrorBody::parse(&raw).message,
            });
        }

        if !status.is_success() {
            let message = ErrorBody::parse(&raw).message;
            warn!("API answered {}: {:?}", status, message);
            return Err(RemoteError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let envelope: Envelope<T> =
            serde_json::from_str(&raw).map_err(|e| RemoteError::Decode(e.to_string()))?;

        envelope.into_data()
    }
}

/// CRUD calls for one collection (`blogs`, `project`, `skill`, `experience`).
pub struct ResourceClient<T> {
    api: ApiClient,
    collection: &'static str,
    _record: PhantomData<fn() -> T>,
}

impl<T> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            collection: self.collection,
            _record: PhantomData,
        }
    }
}

impl<T: DeserializeOwned> ResourceClient<T> {
    pub fn new(api: ApiClient, collection: &'static str) -> Self {
        Self {
            api,
            collection,
            _record: PhantomData,
        }
    }

    pub fn collection(&self) -> &'static str {
        self.collection
    }

    /// A successful list with no `data` is an empty collection.
    pub async fn list(&self, credential: Option<&Credential>) -> Result<Vec<T>, RemoteError> {
        let items: Option<Vec<T>> = self.api.get(&[self.collection], credential).await?;
        Ok(items.unwrap_or_default())
    }

    pub async fn get(&self, id: &str, credential: Option<&Credential>) -> Result<T, RemoteError> {
        self.api
            .get::<T>(&[self.collection, id], credential)
            .await?
            .ok_or_else(|| RemoteError::Decode("response did not include data".to_string()))
    }

    /// Returns the saved record when the API echoes it back. Some endpoints
    /// answer with a write summary instead; that is still a success.
    pub async fn create<B>(&self, body: &B, credential: &Credential) -> Result<Option<T>, RemoteError>
    where
        B: Serialize + ?Sized,
    {
        let data: Option<Value> = self
            .api
            .post(&[self.collection], body, Some(credential))
            .await?;
        Ok(self.saved_record(data))
    }

    pub async fn update<B>(
        &self,
        id: &str,
        body: &B,
        credential: &Credential,
    ) -> Result<Option<T>, RemoteError>
    where
        B: Serialize + ?Sized,
    {
        let data: Option<Value> = self
            .api
            .patch(&[self.collection, id], body, Some(credential))
            .await?;
        Ok(self.saved_record(data))
    }

    pub async fn delete(&self, id: &str, credential: &Credential) -> Result<(), RemoteError> {
        self.api
            .delete(&[self.collection, id], Some(credential))
            .await
    }

    fn saved_record(&self, data: Option<Value>) -> Option<T> {
        let value = data?;
        match serde_json::from_value(value) {
            Ok(record) => Some(record),
            Err(e) => {
                debug!("Saved {} response is not a record: {}", self.collection, e);
                None
            }
        }
    }
}
