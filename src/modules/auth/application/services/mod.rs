mod auth_events;

pub use auth_events::AuthEvents;
