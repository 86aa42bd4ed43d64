use crate::error::{AppError, AppResult};
use bcrypt::{hash, verify};

#[cfg(test)]
use mockall::automock;

/// One-way hashing and verification of plaintext credentials.
#[cfg_attr(test, automock)]
pub trait PasswordService: Send + Sync {
    /// Hashes `password`, failing with `AppError::HashingError`.
    fn hash_password(&self, password: &str) -> AppResult<String>;

    /// Checks `password` against `hashed_password`.
    ///
    /// A mismatch is `AppError::Unauthorized`; a hash bcrypt cannot parse is
    /// `AppError::HashingError`.
    fn check_password_hash(&self, hashed_password: &str, password: &str) -> AppResult<()>;
}

/// `PasswordService` backed by bcrypt.
#[derive(Debug, Clone)]
pub struct BcryptPasswordService {
    cost: u32,
}

impl BcryptPasswordService {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptPasswordService {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

impl PasswordService for BcryptPasswordService {
    fn hash_password(&self, password: &str) -> AppResult<String> {
        hash(password, self.cost)
            .map_err(|e| AppError::HashingError(format!("Failed to hash password: {}", e)))
    }

    fn check_password_hash(&self, hashed_password: &str, password: &str) -> AppResult<()> {
        let matches = verify(password, hashed_password)
            .map_err(|e| AppError::HashingError(format!("Failed to verify password: {}", e)))?;
        if matches {
            Ok(())
        } else {
            Err(AppError::Unauthorized("invalid username or password".into()))
        }
    }
}
