//! Authentication route handlers
//!
//! - Registration
//! - Login (access token issue)
//! - Current user lookup

pub mod login;
pub mod me;
pub mod register;

pub use login::login;
pub use me::me;
pub use register::register;
