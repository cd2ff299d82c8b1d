//! 错误转换模块
//!
//! 将仓库层错误 (db::repository) 转换为 API 错误 (shared::error)

use crate::db::repository::RepoError;
use shared::{AppError, ErrorCode};

impl From<RepoError> for AppError {
    fn from(e: RepoError) -> Self {
        match e {
            RepoError::Validation(app_err) => app_err,
            RepoError::NotFound(msg) => AppError::with_message(ErrorCode::NotFound, msg),
            RepoError::Duplicate(msg) => AppError::with_message(ErrorCode::AlreadyExists, msg),
            RepoError::Database(msg) => {
                tracing::error!(error = %msg, "Repository database error");
                AppError::new(ErrorCode::DatabaseError)
            }
        }
    }
}

/// Remap a generic repo error onto a domain-specific error code, keeping
/// the repo's message
pub fn with_code(e: RepoError, not_found: ErrorCode, duplicate: ErrorCode) -> AppError {
    match e {
        RepoError::NotFound(msg) => AppError::with_message(not_found, msg),
        RepoError::Duplicate(msg) => AppError::with_message(duplicate, msg),
        other => other.into(),
    }
}
