mod session_credentials;

pub use session_credentials::{SessionCredentials, SessionError};
