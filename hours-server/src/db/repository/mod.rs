//! Repository Module
//!
//! CRUD operations for the store hours tables. All repositories are
//! plain async functions taking a `&SqlitePool` as first argument.

pub mod holiday;
pub mod holiday_hours;
pub mod regular_hours;
pub mod settings;
pub mod special_hours;

use chrono::NaiveDate;
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    /// Carries the structured error so domain codes survive to the API
    #[error("Validation error: {0}")]
    Validation(#[from] shared::AppError),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                return RepoError::Duplicate(db_err.to_string());
            }
        }
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Decode a JSON text column (time slot lists, settings sub-objects)
pub(crate) fn decode_json<T: DeserializeOwned>(column: &str, raw: &str) -> RepoResult<T> {
    serde_json::from_str(raw)
        .map_err(|e| RepoError::Database(format!("Corrupt {column} column: {e}")))
}

/// Decode an optional JSON text column
pub(crate) fn decode_json_opt<T: DeserializeOwned>(
    column: &str,
    raw: Option<&str>,
) -> RepoResult<Option<T>> {
    raw.map(|r| decode_json(column, r)).transpose()
}

/// Encode a value for a JSON text column
pub(crate) fn encode_json<T: Serialize>(column: &str, value: &T) -> RepoResult<String> {
    serde_json::to_string(value)
        .map_err(|e| RepoError::Database(format!("Failed to encode {column}: {e}")))
}

/// Parse an ISO "YYYY-MM-DD" date column
pub(crate) fn parse_date(column: &str, raw: &str) -> RepoResult<NaiveDate> {
    raw.parse()
        .map_err(|e| RepoError::Database(format!("Corrupt {column} column: {e}")))
}
