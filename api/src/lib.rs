// Library exports for testing and the server binary

pub mod app;
pub mod dto;
pub mod handlers;
pub mod logging;
pub mod middleware;
pub mod routes;

pub use app::{create_app, AppState};
