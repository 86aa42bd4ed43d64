//! Orchestration between route handlers and the repositories/services.

pub mod task;
pub mod user;

pub use task::{TaskManager, TaskUsecase};
pub use user::{UserManager, UserUsecase, INVALID_CREDENTIALS};
