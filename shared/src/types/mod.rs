//! Type definitions module
//!
//! - `pagination` - offset/limit pagination for list endpoints
//! - `response` - root and health-check bodies

pub mod pagination;
pub mod response;

pub use pagination::{PaginatedResponse, Pagination, DEFAULT_LIMIT, MAX_LIMIT};
pub use response::{DatabaseStatus, HealthResponse, RootResponse, API_VERSION};
