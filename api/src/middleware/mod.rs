pub mod auth;
pub mod cors;
pub mod db_errors;

pub use auth::{AuthContext, JwtAuth};
pub use cors::create_cors;
pub use db_errors::DbErrorGuard;
