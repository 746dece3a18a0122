//! Domain entities representing core business objects.

pub mod hero;
pub mod token;
pub mod user;

// Re-export commonly used types
pub use hero::{Hero, HeroChanges, HeroDraft, NewHero};
pub use token::{AccessToken, Claims, TOKEN_TYPE};
pub use user::{Actor, NewUser, User};
