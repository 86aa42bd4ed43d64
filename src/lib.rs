#![doc = "The `taskdesk` library crate."]
#![doc = ""]
#![doc = "Domain models, repositories, authentication services, use cases, routes and error"]
#![doc = "handling for the Taskdesk service. The binary (`main.rs`) wires the Postgres-backed"]
#![doc = "implementations together and runs the HTTP server."]

pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod routes;
pub mod usecases;

pub use crate::error::{AppError, AppResult};
