pub mod auth;
pub mod blog;
pub mod editor;
pub mod experience;
pub mod media;
pub mod project;
pub mod skill;
