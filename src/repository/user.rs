use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::models::User;

#[cfg(test)]
use mockall::automock;

/// Storage of `User` records.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts `user` as given. A taken username is `AppError::BadRequest`.
    async fn register(&self, user: User) -> AppResult<User>;

    /// Looks a user up by exact username.
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// All users, ordered by username.
    async fn get_users(&self) -> AppResult<Vec<User>>;
}

pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn register(&self, user: User) -> AppResult<User> {
        let result = sqlx::query_as::<_, User>(
            "INSERT INTO users (id, username, password, role)
             VALUES ($1, $2, $3, $4)
             RETURNING id, username, password, role",
        )
        .bind(user.id)
        .bind(&user.username)
        .bind(&user.password)
        .bind(&user.role)
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(stored) => Ok(stored),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => Err(
                AppError::BadRequest(format!("Username '{}' is already taken", user.username)),
            ),
            Err(e) => Err(e.into()),
        }
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, password, role FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn get_users(&self) -> AppResult<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            "SELECT id, username, password, role FROM users ORDER BY username",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }
}
