pub mod extractors;
pub mod middleware;
pub mod password;
pub mod token;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use validator::Validate;

pub use extractors::AuthenticatedUser;
pub use middleware::AuthMiddleware;
pub use password::{BcryptPasswordService, PasswordService};
pub use token::{Claims, JwtService, TokenService};

lazy_static! {
    // Regex for username validation: alphanumeric, underscores, hyphens
    static ref USERNAME_REGEX: regex::Regex = regex::Regex::new(r"^[a-zA-Z0-9_-]+$").unwrap();
    static ref ROLE_REGEX: regex::Regex = regex::Regex::new(r"^(user|admin)$").unwrap();
}

/// Represents the payload for a user login request.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// Represents the payload for a new user registration request.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Desired username for the new account.
    /// Must be between 3 and 32 characters, alphanumeric, and can include underscores or hyphens.
    #[validate(
        length(min = 3, max = 32),
        regex(
            path = "USERNAME_REGEX",
            message = "Username must be alphanumeric, underscores, or hyphens"
        )
    )]
    pub username: String,
    /// Password for the new account.
    /// Between 6 and 72 characters; bcrypt ignores everything past byte 72.
    #[validate(length(min = 6, max = 72))]
    pub password: String,
    /// Role label; `user` when omitted.
    #[validate(regex(path = "ROLE_REGEX", message = "Role must be either user or admin"))]
    pub role: Option<String>,
}

/// Response body of a successful login.
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    /// The signed JWT for subsequent requests.
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_login_request_validation() {
        let valid_login = LoginRequest {
            username: "alice".to_string(),
            password: "password123".to_string(),
        };
        assert!(valid_login.validate().is_ok());

        let empty_password = LoginRequest {
            username: "alice".to_string(),
            password: "".to_string(),
        };
        assert!(empty_password.validate().is_err());
    }

    #[test]
    fn test_register_request_validation() {
        let valid_register = RegisterRequest {
            username: "test_user-123".to_string(),
            password: "password123".to_string(),
            role: None,
        };
        assert!(valid_register.validate().is_ok());

        let invalid_username_register = RegisterRequest {
            username: "test user!".to_string(), // Contains space and exclamation
            password: "password123".to_string(),
            role: None,
        };
        assert!(invalid_username_register.validate().is_err());

        let short_username_register = RegisterRequest {
            username: "tu".to_string(),
            password: "password123".to_string(),
            role: None,
        };
        assert!(short_username_register.validate().is_err());

        let short_password_register = RegisterRequest {
            username: "test_user".to_string(),
            password: "12345".to_string(),
            role: None,
        };
        assert!(short_password_register.validate().is_err());

        let long_password_register = RegisterRequest {
            username: "test_user".to_string(),
            password: "p".repeat(73),
            role: None,
        };
        assert!(long_password_register.validate().is_err());

        let longest_password_register = RegisterRequest {
            username: "test_user".to_string(),
            password: "p".repeat(72),
            role: None,
        };
        assert!(longest_password_register.validate().is_ok());
    }

    #[test]
    fn test_register_request_role_validation() {
        let admin = RegisterRequest {
            username: "root_user".to_string(),
            password: "password123".to_string(),
            role: Some("admin".to_string()),
        };
        assert!(admin.validate().is_ok());

        let unknown_role = RegisterRequest {
            username: "root_user".to_string(),
            password: "password123".to_string(),
            role: Some("superuser".to_string()),
        };
        assert!(unknown_role.validate().is_err());
    }
}
