use crate::error::{AppError, AppResult};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

#[cfg(test)]
use mockall::automock;

/// Represents the claims encoded within a JWT (JSON Web Token).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    /// Subject of the token: the username.
    pub sub: String,
    /// Role label used for authorization decisions.
    pub role: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: usize,
    /// Expiration timestamp (seconds since epoch).
    pub exp: usize,
}

/// Issues and verifies signed identity tokens.
#[cfg_attr(test, automock)]
pub trait TokenService: Send + Sync {
    /// Produces a signed token asserting `username` and `role`.
    ///
    /// Returns `AppError::TokenError` if the token cannot be encoded.
    fn generate_jwt(&self, username: &str, role: &str) -> AppResult<String>;

    /// Verifies a token's signature and expiry and decodes its claims.
    ///
    /// Returns `AppError::Unauthorized` if the token is malformed, its signature is
    /// invalid, or it has expired.
    fn verify_jwt(&self, token: &str) -> AppResult<Claims>;
}

/// HS256 `TokenService` keyed by a shared secret.
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiration_hours: i64,
}

impl JwtService {
    pub fn new(secret: &str, expiration_hours: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            expiration_hours,
        }
    }
}

impl TokenService for JwtService {
    fn generate_jwt(&self, username: &str, role: &str) -> AppResult<String> {
        let now = chrono::Utc::now();
        let expiration = chrono::Duration::try_hours(self.expiration_hours)
            .and_then(|lifetime| now.checked_add_signed(lifetime))
            .ok_or_else(|| AppError::TokenError("Token expiration out of range".into()))?;

        let claims = Claims {
            sub: username.to_string(),
            role: role.to_string(),
            iat: now.timestamp() as usize,
            exp: expiration.timestamp() as usize,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::TokenError(format!("Failed to generate token: {}", e)))
    }

    fn verify_jwt(&self, token: &str) -> AppResult<Claims> {
        decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map(|data| data.claims)
            .map_err(|e| AppError::Unauthorized(format!("Invalid token: {}", e)))
    }
}
