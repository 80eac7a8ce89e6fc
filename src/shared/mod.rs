pub mod api;
pub mod config;
pub mod form;
pub mod remote;
