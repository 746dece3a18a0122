pub mod auth;
pub mod hero;

pub use auth::{LoginData, TokenResponse, UserCreate, UserResponse};
pub use hero::{DeleteResponse, HeroCreate, HeroListQuery, HeroResponse, HeroUpdate};
