//! Unified error codes for the hours service
//!
//! This module defines all error codes used across hours-server and the
//! admin frontend. Error codes are organized by category:
//! - 0xxx: General errors
//! - 3xxx: Store errors
//! - 4xxx: Weekly schedule errors
//! - 5xxx: Holiday errors
//! - 6xxx: Special date errors
//! - 7xxx: Settings errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 3xxx: Store ====================
    /// Store not found
    StoreNotFound = 3001,

    // ==================== 4xxx: Weekly schedule ====================
    /// Weekly schedule entirely missing for the store (configuration defect)
    ScheduleUnavailable = 4001,
    /// Weekly schedule does not cover all seven weekdays
    ScheduleIncomplete = 4002,
    /// Two entries share the same weekday
    DuplicateWeekday = 4003,
    /// Weekday index outside 0..=6
    InvalidWeekday = 4004,
    /// Time slot with open >= close
    InvalidTimeSlot = 4005,
    /// Open day submitted without any time slots
    OpenDayWithoutSlots = 4006,

    // ==================== 5xxx: Holiday ====================
    /// Holiday not found in the calendar
    HolidayNotFound = 5001,
    /// Holiday hours override not found
    HolidayHoursNotFound = 5002,
    /// Holiday already has an hours override
    HolidayHoursExists = 5003,

    // ==================== 6xxx: Special dates ====================
    /// Special hours record not found
    SpecialHoursNotFound = 6001,
    /// A special hours record already exists for the date
    SpecialDateExists = 6002,

    // ==================== 7xxx: Settings ====================
    /// default_holiday_action is "modified" but no modified hours are set
    ModifiedHoursMissing = 7001,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Configuration error
    ConfigError = 9005,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Store
            ErrorCode::StoreNotFound => "Store not found",

            // Weekly schedule
            ErrorCode::ScheduleUnavailable => "Weekly schedule is unavailable for this store",
            ErrorCode::ScheduleIncomplete => "Weekly schedule must cover all seven weekdays",
            ErrorCode::DuplicateWeekday => "Weekly schedule has duplicate weekday entries",
            ErrorCode::InvalidWeekday => "Weekday must be between 0 (Sunday) and 6 (Saturday)",
            ErrorCode::InvalidTimeSlot => "Time slot must open before it closes",
            ErrorCode::OpenDayWithoutSlots => "An open day requires at least one time slot",

            // Holiday
            ErrorCode::HolidayNotFound => "Holiday not found",
            ErrorCode::HolidayHoursNotFound => "Holiday hours override not found",
            ErrorCode::HolidayHoursExists => "Holiday already has an hours override",

            // Special dates
            ErrorCode::SpecialHoursNotFound => "Special hours record not found",
            ErrorCode::SpecialDateExists => "Special hours already exist for this date",

            // Settings
            ErrorCode::ModifiedHoursMissing => {
                "Modified holiday action requires modified holiday hours"
            }

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Store
            3001 => Ok(ErrorCode::StoreNotFound),

            // Weekly schedule
            4001 => Ok(ErrorCode::ScheduleUnavailable),
            4002 => Ok(ErrorCode::ScheduleIncomplete),
            4003 => Ok(ErrorCode::DuplicateWeekday),
            4004 => Ok(ErrorCode::InvalidWeekday),
            4005 => Ok(ErrorCode::InvalidTimeSlot),
            4006 => Ok(ErrorCode::OpenDayWithoutSlots),

            // Holiday
            5001 => Ok(ErrorCode::HolidayNotFound),
            5002 => Ok(ErrorCode::HolidayHoursNotFound),
            5003 => Ok(ErrorCode::HolidayHoursExists),

            // Special dates
            6001 => Ok(ErrorCode::SpecialHoursNotFound),
            6002 => Ok(ErrorCode::SpecialDateExists),

            // Settings
            7001 => Ok(ErrorCode::ModifiedHoursMissing),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),
            9005 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        // General
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::Unknown.code(), 1);
        assert_eq!(ErrorCode::ValidationFailed.code(), 2);
        assert_eq!(ErrorCode::NotFound.code(), 3);
        assert_eq!(ErrorCode::AlreadyExists.code(), 4);
        assert_eq!(ErrorCode::InvalidRequest.code(), 5);
        assert_eq!(ErrorCode::InvalidFormat.code(), 6);
        assert_eq!(ErrorCode::RequiredField.code(), 7);
        assert_eq!(ErrorCode::ValueOutOfRange.code(), 8);

        // Store
        assert_eq!(ErrorCode::StoreNotFound.code(), 3001);

        // Weekly schedule
        assert_eq!(ErrorCode::ScheduleUnavailable.code(), 4001);
        assert_eq!(ErrorCode::ScheduleIncomplete.code(), 4002);
        assert_eq!(ErrorCode::DuplicateWeekday.code(), 4003);
        assert_eq!(ErrorCode::InvalidWeekday.code(), 4004);
        assert_eq!(ErrorCode::InvalidTimeSlot.code(), 4005);
        assert_eq!(ErrorCode::OpenDayWithoutSlots.code(), 4006);

        // Holiday
        assert_eq!(ErrorCode::HolidayNotFound.code(), 5001);
        assert_eq!(ErrorCode::HolidayHoursNotFound.code(), 5002);
        assert_eq!(ErrorCode::HolidayHoursExists.code(), 5003);

        // Special dates
        assert_eq!(ErrorCode::SpecialHoursNotFound.code(), 6001);
        assert_eq!(ErrorCode::SpecialDateExists.code(), 6002);

        // Settings
        assert_eq!(ErrorCode::ModifiedHoursMissing.code(), 7001);

        // System
        assert_eq!(ErrorCode::InternalError.code(), 9001);
        assert_eq!(ErrorCode::DatabaseError.code(), 9002);
        assert_eq!(ErrorCode::ConfigError.code(), 9005);
    }

    #[test]
    fn test_is_success() {
        assert!(ErrorCode::Success.is_success());
        assert!(!ErrorCode::Unknown.is_success());
        assert!(!ErrorCode::NotFound.is_success());
        assert!(!ErrorCode::InternalError.is_success());
    }

    #[test]
    fn test_try_from_valid() {
        assert_eq!(ErrorCode::try_from(0), Ok(ErrorCode::Success));
        assert_eq!(ErrorCode::try_from(4001), Ok(ErrorCode::ScheduleUnavailable));
        assert_eq!(ErrorCode::try_from(6002), Ok(ErrorCode::SpecialDateExists));
        assert_eq!(ErrorCode::try_from(9001), Ok(ErrorCode::InternalError));
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(999), Err(InvalidErrorCode(999)));
        assert_eq!(ErrorCode::try_from(10000), Err(InvalidErrorCode(10000)));
        assert_eq!(ErrorCode::try_from(1234), Err(InvalidErrorCode(1234)));
    }

    #[test]
    fn test_serialize() {
        let code = ErrorCode::NotFound;
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "3");

        let code = ErrorCode::SpecialDateExists;
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "6002");

        let code = ErrorCode::Success;
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "0");
    }

    #[test]
    fn test_deserialize() {
        let code: ErrorCode = serde_json::from_str("0").unwrap();
        assert_eq!(code, ErrorCode::Success);

        let code: ErrorCode = serde_json::from_str("4001").unwrap();
        assert_eq!(code, ErrorCode::ScheduleUnavailable);

        let code: ErrorCode = serde_json::from_str("9002").unwrap();
        assert_eq!(code, ErrorCode::DatabaseError);
    }

    #[test]
    fn test_deserialize_invalid() {
        let result: Result<ErrorCode, _> = serde_json::from_str("999");
        assert!(result.is_err());

        let result: Result<ErrorCode, _> = serde_json::from_str("10000");
        assert!(result.is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", ErrorCode::Success), "0");
        assert_eq!(format!("{}", ErrorCode::NotFound), "3");
        assert_eq!(format!("{}", ErrorCode::HolidayNotFound), "5001");
        assert_eq!(format!("{}", ErrorCode::InternalError), "9001");
    }

    #[test]
    fn test_message() {
        assert_eq!(
            ErrorCode::Success.message(),
            "Operation completed successfully"
        );
        assert_eq!(ErrorCode::NotFound.message(), "Resource not found");
        assert_eq!(
            ErrorCode::SpecialDateExists.message(),
            "Special hours already exist for this date"
        );
        assert_eq!(ErrorCode::InternalError.message(), "Internal server error");
    }

    #[test]
    fn test_roundtrip() {
        // Test that serialization -> deserialization roundtrip works
        let codes = [
            ErrorCode::Success,
            ErrorCode::ScheduleUnavailable,
            ErrorCode::HolidayHoursExists,
            ErrorCode::SpecialDateExists,
            ErrorCode::InternalError,
        ];

        for code in codes {
            let json = serde_json::to_string(&code).unwrap();
            let parsed: ErrorCode = serde_json::from_str(&json).unwrap();
            assert_eq!(code, parsed);
        }
    }

    #[test]
    fn test_hash() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(ErrorCode::Success);
        set.insert(ErrorCode::NotFound);
        set.insert(ErrorCode::Success); // Duplicate

        assert_eq!(set.len(), 2);
        assert!(set.contains(&ErrorCode::Success));
        assert!(set.contains(&ErrorCode::NotFound));
    }
}
