use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::{PasswordService, TokenService};
use crate::error::{AppError, AppResult};
use crate::models::User;
use crate::repository::UserRepository;

/// Message reported for an unknown username or a wrong password.
pub const INVALID_CREDENTIALS: &str = "invalid username or password";

/// Account operations available to route handlers.
#[async_trait]
pub trait UserUsecase: Send + Sync {
    /// Stores `user`, replacing its plaintext password with a hash first.
    async fn register(&self, user: User) -> AppResult<User>;

    /// Checks the credentials and returns a signed token for the user.
    async fn login(&self, username: String, password: String) -> AppResult<String>;

    async fn get_users(&self) -> AppResult<Vec<User>>;
}

/// `UserUsecase` composed from a repository, a hasher and a token issuer.
///
/// Every step short-circuits: the first failing collaborator's error is returned as is
/// and nothing after it runs.
pub struct UserManager {
    users: Arc<dyn UserRepository>,
    passwords: Arc<dyn PasswordService>,
    tokens: Arc<dyn TokenService>,
}

impl UserManager {
    pub fn new(
        users: Arc<dyn UserRepository>,
        passwords: Arc<dyn PasswordService>,
        tokens: Arc<dyn TokenService>,
    ) -> Self {
        Self {
            users,
            passwords,
            tokens,
        }
    }
}

#[async_trait]
impl UserUsecase for UserManager {
    async fn register(&self, user: User) -> AppResult<User> {
        let password = self.passwords.hash_password(&user.password)?;
        let stored = self.users.register(User { password, ..user }).await?;

        log::info!("registered user '{}' with role '{}'", stored.username, stored.role);
        Ok(stored)
    }

    async fn login(&self, username: String, password: String) -> AppResult<String> {
        let user = match self.users.find_by_username(&username).await? {
            Some(user) => user,
            None => {
                log::warn!("login attempt for unknown user '{}'", username);
                return Err(AppError::NotFound(INVALID_CREDENTIALS.into()));
            }
        };

        if let Err(e) = self.passwords.check_password_hash(&user.password, &password) {
            log::warn!("password check failed for user '{}'", username);
            return Err(e);
        }

        let token = self.tokens.generate_jwt(&user.username, &user.role)?;
        log::info!("user '{}' logged in", user.username);
        Ok(token)
    }

    async fn get_users(&self) -> AppResult<Vec<User>> {
        self.users.get_users().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::password::MockPasswordService;
    use crate::auth::token::MockTokenService;
    use crate::models::{ROLE_ADMIN, ROLE_USER};
    use crate::repository::MockUserRepository;
    use pretty_assertions::assert_eq;

    fn manager(
        users: MockUserRepository,
        passwords: MockPasswordService,
        tokens: MockTokenService,
    ) -> UserManager {
        UserManager::new(Arc::new(users), Arc::new(passwords), Arc::new(tokens))
    }

    #[actix_rt::test]
    async fn test_register_stores_hashed_password() {
        let user = User::new("testuser", "password", ROLE_USER);
        let id = user.id;

        let mut passwords = MockPasswordService::new();
        passwords
            .expect_hash_password()
            .withf(|plain| plain == "password")
            .times(1)
            .returning(|_| Ok("hashedpassword".to_string()));

        let mut users = MockUserRepository::new();
        users
            .expect_register()
            .withf(move |u| u.id == id && u.username == "testuser" && u.password == "hashedpassword")
            .times(1)
            .returning(|u| Ok(u));

        let created = manager(users, passwords, MockTokenService::new())
            .register(user)
            .await
            .unwrap();

        assert_eq!(created.password, "hashedpassword");
        assert_eq!(created.username, "testuser");
        assert_eq!(created.role, ROLE_USER);
    }

    #[actix_rt::test]
    async fn test_register_hashing_error_skips_repository() {
        let mut passwords = MockPasswordService::new();
        passwords
            .expect_hash_password()
            .times(1)
            .returning(|_| Err(AppError::HashingError("hashing error".into())));

        let mut users = MockUserRepository::new();
        users.expect_register().never();

        let err = manager(users, passwords, MockTokenService::new())
            .register(User::new("testuser", "password", ROLE_USER))
            .await
            .unwrap_err();

        assert_eq!(err, AppError::HashingError("hashing error".into()));
    }

    #[actix_rt::test]
    async fn test_register_repository_error_passes_through() {
        let mut passwords = MockPasswordService::new();
        passwords
            .expect_hash_password()
            .returning(|_| Ok("hashedpassword".to_string()));

        let mut users = MockUserRepository::new();
        users
            .expect_register()
            .times(1)
            .returning(|_| Err(AppError::BadRequest("Username 'testuser' is already taken".into())));

        let err = manager(users, passwords, MockTokenService::new())
            .register(User::new("testuser", "password", ROLE_USER))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            AppError::BadRequest("Username 'testuser' is already taken".into())
        );
    }

    #[actix_rt::test]
    async fn test_login_returns_token_for_username_and_role() {
        let stored = User::new("testuser", "hashedpassword", ROLE_ADMIN);

        let mut users = MockUserRepository::new();
        users
            .expect_find_by_username()
            .withf(|name| name == "testuser")
            .times(1)
            .returning(move |_| Ok(Some(stored.clone())));

        let mut passwords = MockPasswordService::new();
        passwords
            .expect_check_password_hash()
            .withf(|hash, plain| hash == "hashedpassword" && plain == "password")
            .times(1)
            .returning(|_, _| Ok(()));

        let mut tokens = MockTokenService::new();
        tokens
            .expect_generate_jwt()
            .withf(|name, role| name == "testuser" && role == "admin")
            .times(1)
            .returning(|_, _| Ok("jwt_token".to_string()));

        let token = manager(users, passwords, tokens)
            .login("testuser".to_string(), "password".to_string())
            .await
            .unwrap();

        assert_eq!(token, "jwt_token");
    }

    #[actix_rt::test]
    async fn test_login_unknown_user_skips_hashing_and_token() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_username()
            .times(1)
            .returning(|_| Ok(None));

        let mut passwords = MockPasswordService::new();
        passwords.expect_check_password_hash().never();
        let mut tokens = MockTokenService::new();
        tokens.expect_generate_jwt().never();

        let err = manager(users, passwords, tokens)
            .login("invaliduser".to_string(), "wrongpassword".to_string())
            .await
            .unwrap_err();

        assert_eq!(err, AppError::NotFound(INVALID_CREDENTIALS.into()));
        assert_eq!(err.message(), "invalid username or password");
    }

    #[actix_rt::test]
    async fn test_login_wrong_password_skips_token() {
        let stored = User::new("testuser", "hashedpassword", ROLE_USER);

        let mut users = MockUserRepository::new();
        users
            .expect_find_by_username()
            .returning(move |_| Ok(Some(stored.clone())));

        let mut passwords = MockPasswordService::new();
        passwords
            .expect_check_password_hash()
            .times(1)
            .returning(|_, _| Err(AppError::Unauthorized(INVALID_CREDENTIALS.into())));

        let mut tokens = MockTokenService::new();
        tokens.expect_generate_jwt().never();

        let err = manager(users, passwords, tokens)
            .login("testuser".to_string(), "wrongpassword".to_string())
            .await
            .unwrap_err();

        assert_eq!(err, AppError::Unauthorized(INVALID_CREDENTIALS.into()));
    }

    #[actix_rt::test]
    async fn test_login_repository_error_passes_through() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_username()
            .returning(|_| Err(AppError::DatabaseError("connection reset".into())));

        let mut passwords = MockPasswordService::new();
        passwords.expect_check_password_hash().never();

        let err = manager(users, passwords, MockTokenService::new())
            .login("testuser".to_string(), "password".to_string())
            .await
            .unwrap_err();

        assert_eq!(err, AppError::DatabaseError("connection reset".into()));
    }

    #[actix_rt::test]
    async fn test_login_token_error_passes_through() {
        let stored = User::new("testuser", "hashedpassword", ROLE_USER);

        let mut users = MockUserRepository::new();
        users
            .expect_find_by_username()
            .returning(move |_| Ok(Some(stored.clone())));
        let mut passwords = MockPasswordService::new();
        passwords
            .expect_check_password_hash()
            .returning(|_, _| Ok(()));
        let mut tokens = MockTokenService::new();
        tokens
            .expect_generate_jwt()
            .times(1)
            .returning(|_, _| Err(AppError::TokenError("signing failed".into())));

        let err = manager(users, passwords, tokens)
            .login("testuser".to_string(), "password".to_string())
            .await
            .unwrap_err();

        assert_eq!(err, AppError::TokenError("signing failed".into()));
    }

    #[actix_rt::test]
    async fn test_get_users() {
        let expected = vec![
            User::new("user1", "hash1", ROLE_USER),
            User::new("user2", "hash2", ROLE_ADMIN),
        ];
        let returned = expected.clone();

        let mut users = MockUserRepository::new();
        users
            .expect_get_users()
            .times(1)
            .returning(move || Ok(returned.clone()));

        let listed = manager(users, MockPasswordService::new(), MockTokenService::new())
            .get_users()
            .await
            .unwrap();

        assert_eq!(listed, expected);
    }
}
