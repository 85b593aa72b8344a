//! Writes spanning several tables that must commit or fail together.

pub mod user_service;

pub use user_service::{UserService, UserWithProfile};
