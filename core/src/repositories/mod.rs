pub mod health;
pub mod hero;
pub mod user;

pub use health::{DatabaseProbe, MockDatabase};
pub use hero::{HeroRepository, MockHeroRepository};
pub use user::{MockUserRepository, UserRepository};
