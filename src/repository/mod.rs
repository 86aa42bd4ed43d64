//! Persistence access for tasks and users.
//!
//! Each repository is a trait so use cases can be exercised against mocks; the `Pg*`
//! types are the production implementations on top of a shared `sqlx::PgPool`.

pub mod task;
pub mod user;

pub use task::{PgTaskRepository, TaskRepository};
pub use user::{PgUserRepository, UserRepository};

#[cfg(test)]
pub use task::MockTaskRepository;
#[cfg(test)]
pub use user::MockUserRepository;
