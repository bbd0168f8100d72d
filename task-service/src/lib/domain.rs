pub mod auth;
pub mod task;
pub mod user;
