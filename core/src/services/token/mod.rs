//! Token service module for JWT management
//!
//! Issues and verifies the HMAC-signed access tokens handed out on login.

mod service;

pub use service::{jwt_algorithm, TokenService};
