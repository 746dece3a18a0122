//! Main authentication service implementation

use std::sync::Arc;

use crate::domain::entities::token::AccessToken;
use crate::domain::entities::user::{NewUser, User};
use crate::errors::{AuthError, DomainError, DomainResult, ValidationError};
use crate::repositories::UserRepository;
use crate::services::password::PasswordHasher;
use crate::services::token::TokenService;

/// Bounds on a username after surrounding whitespace is removed
const USERNAME_MIN_LENGTH: usize = 3;
const USERNAME_MAX_LENGTH: usize = 50;

/// Registration input, already validated for shape by the caller
#[derive(Debug, Clone)]
pub struct RegisterUser {
    pub email: String,
    pub username: String,
    pub password: String,
}

/// Authentication service for registration, login and identity lookup
pub struct AuthService<U>
where
    U: UserRepository,
{
    /// User repository for database operations
    user_repository: Arc<U>,
    /// Token service for JWT management
    token_service: Arc<TokenService>,
    password_hasher: PasswordHasher,
}

impl<U> AuthService<U>
where
    U: UserRepository,
{
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `user_repository` - Repository for user data persistence
    /// * `token_service` - Service for JWT token management
    /// * `password_hasher` - bcrypt hasher
    pub fn new(
        user_repository: Arc<U>,
        token_service: Arc<TokenService>,
        password_hasher: PasswordHasher,
    ) -> Self {
        Self {
            user_repository,
            token_service,
            password_hasher,
        }
    }

    pub fn token_service(&self) -> &Arc<TokenService> {
        &self.token_service
    }

    /// Register a new user
    ///
    /// E-mail addresses are stored lower-cased. Duplicates are reported per
    /// field; a unique-constraint race reported by the store is surfaced as
    /// `EmailAlreadyRegistered`.
    pub async fn register(&self, input: RegisterUser) -> DomainResult<User> {
        let email = normalize_email(&input.email);
        let username = normalize_username(&input.username)?;

        if self.user_repository.find_by_email(&email).await?.is_some() {
            return Err(AuthError::EmailAlreadyRegistered.into());
        }
        if self.user_repository.find_by_username(&username).await?.is_some() {
            return Err(AuthError::UsernameAlreadyTaken.into());
        }

        let hashed_password = self.password_hasher.hash(&input.password).await?;
        let user = self
            .user_repository
            .create(NewUser::new(email, username, hashed_password))
            .await
            .map_err(|e| match e {
                DomainError::Conflict { .. } => AuthError::EmailAlreadyRegistered.into(),
                other => other,
            })?;

        tracing::info!(user_id = user.id, "User registered");
        Ok(user)
    }

    /// Authenticate with e-mail and password and issue an access token
    ///
    /// Unknown e-mail and wrong password yield the same error.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<AccessToken> {
        let email = normalize_email(email);

        let user = match self.user_repository.find_by_email(&email).await? {
            Some(user) => user,
            None => {
                tracing::debug!("Login failed: unknown email");
                return Err(AuthError::InvalidCredentials.into());
            }
        };

        if !self
            .password_hasher
            .verify(password, &user.hashed_password)
            .await?
        {
            tracing::debug!(user_id = user.id, "Login failed: wrong password");
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self.token_service.issue_access_token(&user)?;
        tracing::info!(user_id = user.id, "User logged in");
        Ok(token)
    }

    /// Load the user behind an authenticated request
    pub async fn current_user(&self, user_id: i32) -> DomainResult<User> {
        self.user_repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AuthError::UserNotFound.into())
    }
}

/// Trims the username and checks its length on what will be stored
fn normalize_username(username: &str) -> DomainResult<String> {
    let username = username.trim();
    let length = username.chars().count();
    if !(USERNAME_MIN_LENGTH..=USERNAME_MAX_LENGTH).contains(&length) {
        return Err(ValidationError::InvalidLength {
            field: "username".to_string(),
            min: USERNAME_MIN_LENGTH,
            max: USERNAME_MAX_LENGTH,
        }
        .into());
    }
    Ok(username.to_string())
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
