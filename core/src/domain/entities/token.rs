//! Token entities for JWT-based authentication.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::User;

/// `token_type` reported to OAuth2-style clients
pub const TOKEN_TYPE: &str = "bearer";

/// Claims structure for JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,

    /// E-mail of the user at issue time
    pub email: String,

    /// Whether the user was an admin at issue time
    #[serde(default)]
    pub is_admin: bool,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// JWT ID (unique identifier for the token)
    pub jti: String,
}

impl Claims {
    /// Creates new claims for an access token valid for `ttl`
    ///
    /// `None` when the expiry falls outside the representable date range.
    pub fn for_user(user: &User, ttl: Duration) -> Option<Self> {
        let now = Utc::now();
        let expires_at = now.checked_add_signed(ttl)?;
        Some(Self {
            sub: user.id.to_string(),
            email: user.email.clone(),
            is_admin: user.is_admin,
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
            jti: Uuid::new_v4().to_string(),
        })
    }

    /// Gets the user ID from the claims
    pub fn user_id(&self) -> Result<i32, std::num::ParseIntError> {
        self.sub.parse()
    }
}

/// Access token handed out by a successful login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    pub token_type: String,
}

impl AccessToken {
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: TOKEN_TYPE.to_string(),
        }
    }
}
