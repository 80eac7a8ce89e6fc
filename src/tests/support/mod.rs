pub mod api_mocks;
pub mod app_state_builder;
pub mod auth_helper;
pub mod fake_api;
pub mod fixtures;
pub mod stubs;
