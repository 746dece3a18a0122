//! HTTP route handlers

pub mod auth;
pub mod heroes;
pub mod system;
