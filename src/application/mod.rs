pub mod auth;
pub mod job;
