pub mod auth_api_http;
pub mod in_memory_session_store;
pub mod jwt;
