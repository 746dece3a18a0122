use hero_core::domain::entities::token::AccessToken;
use hero_core::domain::entities::user::User;
use hero_core::services::RegisterUser;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UserCreate {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    /// Public handle, unique across users
    #[validate(length(min = 3, max = 50, message = "Username must be 3 to 50 characters"))]
    pub username: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

impl From<UserCreate> for RegisterUser {
    fn from(req: UserCreate) -> Self {
        RegisterUser {
            email: req.email,
            username: req.username,
            password: req.password,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginData {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Public view of a user; never includes the password hash
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i32,
    pub email: String,
    pub username: String,
    pub is_admin: bool,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            username: user.username,
            is_admin: user.is_admin,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

impl From<AccessToken> for TokenResponse {
    fn from(token: AccessToken) -> Self {
        Self {
            access_token: token.access_token,
            token_type: token.token_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_create(email: &str, username: &str, password: &str) -> UserCreate {
        UserCreate {
            email: email.to_string(),
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_user_create_validation() {
        assert!(user_create("hero@example.com", "hero", "longenough").validate().is_ok());

        let errors = user_create("not-an-email", "hero", "longenough").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));

        let errors = user_create("hero@example.com", "hi", "longenough").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("username"));

        let errors = user_create("hero@example.com", &"x".repeat(51), "short").validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("username"));
        assert!(fields.contains_key("password"));
    }

    #[test]
    fn test_user_response_drops_password() {
        let user = User {
            id: 1,
            email: "hero@example.com".into(),
            username: "hero".into(),
            hashed_password: "$2b$hash".into(),
            is_admin: false,
        };
        let json = serde_json::to_value(UserResponse::from(user)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 1, "email": "hero@example.com", "username": "hero", "is_admin": false})
        );
    }
}
