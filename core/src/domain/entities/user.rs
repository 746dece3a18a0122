//! User entity representing a registered account.

use serde::{Deserialize, Serialize};

/// User entity representing a registered user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: i32,

    /// Login e-mail, unique across users
    pub email: String,

    /// Display name, unique across users
    pub username: String,

    /// bcrypt hash of the password
    #[serde(skip_serializing)]
    pub hashed_password: String,

    /// Whether the user may manage every hero
    pub is_admin: bool,
}

/// User data ready to be persisted; the id is assigned by the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub email: String,
    pub username: String,
    pub hashed_password: String,
    pub is_admin: bool,
}

impl NewUser {
    /// Creates a regular (non-admin) user
    pub fn new(email: impl Into<String>, username: impl Into<String>, hashed_password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            username: username.into(),
            hashed_password: hashed_password.into(),
            is_admin: false,
        }
    }

    /// Materialises the user with a store-assigned id
    pub fn into_user(self, id: i32) -> User {
        User {
            id,
            email: self.email,
            username: self.username,
            hashed_password: self.hashed_password,
            is_admin: self.is_admin,
        }
    }
}

/// Identity of the authenticated caller, taken from a verified token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub user_id: i32,
    pub is_admin: bool,
}
