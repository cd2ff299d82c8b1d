//! Shared types for the Greenline hours service
//!
//! Common types used across crates: domain models for store operating
//! hours, the unified error system, and small utilities.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
