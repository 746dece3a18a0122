//! Main token service implementation

use chrono::Duration;
use hero_shared::{JwtAlgorithm, JwtConfig};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::{AccessToken, Claims};
use crate::domain::entities::user::User;
use crate::errors::{DomainError, TokenError};

/// Maps the configured algorithm onto the jsonwebtoken one
pub fn jwt_algorithm(algorithm: JwtAlgorithm) -> Algorithm {
    match algorithm {
        JwtAlgorithm::HS256 => Algorithm::HS256,
        JwtAlgorithm::HS384 => Algorithm::HS384,
        JwtAlgorithm::HS512 => Algorithm::HS512,
    }
}

/// Service for issuing and verifying JWT access tokens
pub struct TokenService {
    config: JwtConfig,
    algorithm: Algorithm,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service from the JWT configuration
    pub fn new(config: JwtConfig) -> Self {
        let algorithm = jwt_algorithm(config.algorithm);
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let mut validation = Validation::new(algorithm);
        validation.validate_exp = true;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            config,
            algorithm,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Lifetime of newly issued access tokens
    fn access_token_ttl(&self) -> Option<Duration> {
        Duration::try_minutes(self.config.expiration_minutes)
    }

    /// Issues a bearer access token for `user`
    pub fn issue_access_token(&self, user: &User) -> Result<AccessToken, DomainError> {
        let claims = self
            .access_token_ttl()
            .and_then(|ttl| Claims::for_user(user, ttl))
            .ok_or_else(|| {
                tracing::error!(
                    expiration_minutes = self.config.expiration_minutes,
                    "Access token expiry is out of range"
                );
                DomainError::Token(TokenError::TokenGenerationFailed)
            })?;
        let token = self.encode(&claims)?;
        tracing::debug!(user_id = user.id, jti = %claims.jti, "Issued access token");
        Ok(AccessToken::bearer(token))
    }

    /// Signs arbitrary claims with the configured key
    pub fn encode(&self, claims: &Claims) -> Result<String, DomainError> {
        encode(&Header::new(self.algorithm), claims, &self.encoding_key).map_err(|e| {
            tracing::error!(error = %e, "Failed to sign access token");
            DomainError::Token(TokenError::TokenGenerationFailed)
        })
    }

    /// Verifies signature and expiry, returning the token claims
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - The token is valid
    /// * `Err(TokenError::TokenExpired)` - `exp` is in the past
    /// * `Err(TokenError::InvalidToken)` - Bad signature, algorithm or shape
    pub fn verify_access_token(&self, token: &str) -> Result<Claims, DomainError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::TokenExpired,
                _ => TokenError::InvalidToken,
            }
        })?;

        // Subjects are always numeric user ids
        if data.claims.user_id().is_err() {
            return Err(TokenError::InvalidToken.into());
        }

        Ok(data.claims)
    }
}
