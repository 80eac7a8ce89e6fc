pub mod auth_api;
pub mod session_store;
pub mod token_decoder;

pub use auth_api::AuthApi;
pub use session_store::SessionStore;
pub use token_decoder::{TokenDecoder, TokenError};
