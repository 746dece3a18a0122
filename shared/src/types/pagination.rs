//! Pagination related types for list endpoints

use serde::{Deserialize, Serialize};

/// Default number of items returned by list endpoints
pub const DEFAULT_LIMIT: u32 = 100;

/// Upper bound on `limit`
pub const MAX_LIMIT: u32 = 100;

/// Offset/limit pagination parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Number of items to skip
    #[serde(default)]
    pub offset: u32,

    /// Maximum number of items to return
    #[serde(default = "default_limit")]
    pub limit: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Pagination {
    /// Create a new pagination, clamping `limit` into `1..=MAX_LIMIT`
    pub fn new(offset: u32, limit: u32) -> Self {
        Self { offset, limit }.validate()
    }

    /// Validate and sanitize pagination parameters
    pub fn validate(mut self) -> Self {
        self.limit = self.limit.clamp(1, MAX_LIMIT);
        self
    }

    /// Offset as i64 for SQL queries
    pub fn offset_i64(&self) -> i64 {
        i64::from(self.offset)
    }

    /// Limit as i64 for SQL queries
    pub fn limit_i64(&self) -> i64 {
        i64::from(self.limit)
    }
}

/// Paginated response wrapper with metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    /// The actual data items
    pub data: Vec<T>,

    /// Offset used for this page
    pub offset: u32,

    /// Limit used for this page
    pub limit: u32,

    /// Total number of items
    pub total: u64,
}

impl<T> PaginatedResponse<T> {
    /// Create a new paginated response
    pub fn new(data: Vec<T>, pagination: Pagination, total: u64) -> Self {
        Self {
            data,
            offset: pagination.offset,
            limit: pagination.limit,
            total,
        }
    }

    /// Transform the data items using a function
    pub fn map<U, F>(self, f: F) -> PaginatedResponse<U>
    where
        F: FnMut(T) -> U,
    {
        PaginatedResponse {
            data: self.data.into_iter().map(f).collect(),
            offset: self.offset,
            limit: self.limit,
            total: self.total,
        }
    }
}

fn default_limit() -> u32 {
    DEFAULT_LIMIT
}
