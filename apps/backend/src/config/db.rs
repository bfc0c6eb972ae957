//! Database configuration.
//!
//! Connection settings come from the environment; nothing below the
//! boundary reads env vars directly.

use crate::error::AppError;

/// Database connection URL from `DATABASE_URL`.
pub fn db_url() -> Result<String, AppError> {
    std::env::var("DATABASE_URL")
        .map_err(|_| AppError::config("DATABASE_URL must be set".to_string()))
}
