use std::env;

use crate::error::AppError;

const DEFAULT_JWT_EXPIRATION_HOURS: i64 = 24;
/// Upper bound on token lifetime: one year.
const MAX_JWT_EXPIRATION_HOURS: i64 = 24 * 365;

/// Runtime settings, read from the process environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub server_port: u16,
    pub server_host: String,
    pub jwt_secret: String,
    pub jwt_expiration_hours: i64,
    pub bcrypt_cost: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            server_port: parsed("SERVER_PORT", 8080)?,
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            jwt_secret: required("JWT_SECRET")?,
            jwt_expiration_hours: expiration_hours()?,
            bcrypt_cost: parsed("BCRYPT_COST", bcrypt::DEFAULT_COST)?,
        })
    }

    pub fn server_url(&self) -> String {
        format!("http://{}:{}", self.server_host, self.server_port)
    }
}

fn required(key: &str) -> Result<String, AppError> {
    env::var(key).map_err(|_| AppError::InternalServerError(format!("{} must be set", key)))
}

fn expiration_hours() -> Result<i64, AppError> {
    let hours = parsed("JWT_EXPIRATION_HOURS", DEFAULT_JWT_EXPIRATION_HOURS)?;
    if !(1..=MAX_JWT_EXPIRATION_HOURS).contains(&hours) {
        return Err(AppError::InternalServerError(format!(
            "JWT_EXPIRATION_HOURS must be between 1 and {}",
            MAX_JWT_EXPIRATION_HOURS
        )));
    }
    Ok(hours)
}

fn parsed<T: std::str::FromStr>(key: &str, default: T) -> Result<T, AppError> {
    match env::var(key) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| AppError::InternalServerError(format!("{} must be a number", key))),
        Err(_) => Ok(default),
    }
}
