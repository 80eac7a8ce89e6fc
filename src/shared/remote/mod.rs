mod client;
mod envelope;
mod error;

pub use client::{ApiClient, ResourceClient};
pub use envelope::{Envelope, ErrorBody};
pub use error::RemoteError;
