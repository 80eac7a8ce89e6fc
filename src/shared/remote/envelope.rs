use serde::Deserialize;
use serde_json::Value;

use crate::shared::remote::RemoteError;

/// `{status, data, message}` as returned by every portfolio API endpoint.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub status: Option<Value>,
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    /// A missing status, or one that reads as false (`false`, `0`, `""`,
    /// `null`), is a failure.
    pub fn is_ok(&self) -> bool {
        self.status.as_ref().map(is_truthy).unwrap_or(false)
    }

    pub fn into_data(self) -> Result<Option<T>, RemoteError> {
        if !self.is_ok() {
            return Err(RemoteError::Rejected {
                message: self.message,
            });
        }
        Ok(self.data)
    }
}

/// Only the message matters when a call failed; the rest of the body may not
/// even be JSON.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    pub fn parse(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_default()
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(false),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
