//! Authentication service module
//!
//! Registration, login and current-user lookup on top of a `UserRepository`.

mod service;


pub use service::{AuthService, RegisterUser};
