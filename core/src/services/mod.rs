//! Business services containing domain logic and use cases.

pub mod auth;
pub mod hero;
pub mod password;
pub mod token;

// Re-export commonly used types
pub use auth::{AuthService, RegisterUser};
pub use hero::HeroService;
pub use password::PasswordHasher;
pub use token::TokenService;
