//! PostgreSQL implementations of the core repository traits

mod hero_repository_impl;
mod user_repository_impl;

pub use hero_repository_impl::PgHeroRepository;
pub use user_repository_impl::PgUserRepository;
