//! # Hero Core
//!
//! Core business logic and domain layer for the Hero API.
//! This crate contains domain entities, business services, repository interfaces,
//! and error types that form the foundation of the application architecture.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{AccessToken, Actor, Claims, Hero, HeroChanges, HeroDraft, NewHero, NewUser, User, TOKEN_TYPE};
pub use errors::{AuthError, DomainError, DomainResult, TokenError, ValidationError};
pub use repositories::{
    DatabaseProbe, HeroRepository, MockDatabase, MockHeroRepository, MockUserRepository,
    UserRepository,
};
pub use services::{AuthService, HeroService, PasswordHasher, RegisterUser, TokenService};
