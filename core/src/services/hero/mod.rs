//! Hero management service

mod service;

pub use service::HeroService;
