//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - 0xxx: General errors
/// - 3xxx: Store errors
/// - 4xxx: Weekly schedule errors
/// - 5xxx: Holiday errors
/// - 6xxx: Special date errors
/// - 7xxx: Settings errors
/// - 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Store errors (3xxx)
    Store,
    /// Weekly schedule errors (4xxx)
    Schedule,
    /// Holiday errors (5xxx)
    Holiday,
    /// Special date errors (6xxx)
    Special,
    /// Settings errors (7xxx)
    Settings,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..3000 => Self::General,
            3000..4000 => Self::Store,
            4000..5000 => Self::Schedule,
            5000..6000 => Self::Holiday,
            6000..7000 => Self::Special,
            7000..8000 => Self::Settings,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Store => "store",
            Self::Schedule => "schedule",
            Self::Holiday => "holiday",
            Self::Special => "special",
            Self::Settings => "settings",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_code() {
        assert_eq!(ErrorCategory::from_code(0), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(8), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(999), ErrorCategory::General);

        assert_eq!(ErrorCategory::from_code(3001), ErrorCategory::Store);
        assert_eq!(ErrorCategory::from_code(4001), ErrorCategory::Schedule);
        assert_eq!(ErrorCategory::from_code(5001), ErrorCategory::Holiday);
        assert_eq!(ErrorCategory::from_code(6002), ErrorCategory::Special);
        assert_eq!(ErrorCategory::from_code(7001), ErrorCategory::Settings);
        assert_eq!(ErrorCategory::from_code(9001), ErrorCategory::System);
        assert_eq!(ErrorCategory::from_code(10000), ErrorCategory::System);
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::Success.category(), ErrorCategory::General);
        assert_eq!(ErrorCode::StoreNotFound.category(), ErrorCategory::Store);
        assert_eq!(
            ErrorCode::ScheduleUnavailable.category(),
            ErrorCategory::Schedule
        );
        assert_eq!(
            ErrorCode::HolidayHoursExists.category(),
            ErrorCategory::Holiday
        );
        assert_eq!(
            ErrorCode::SpecialDateExists.category(),
            ErrorCategory::Special
        );
        assert_eq!(
            ErrorCode::ModifiedHoursMissing.category(),
            ErrorCategory::Settings
        );
        assert_eq!(ErrorCode::InternalError.category(), ErrorCategory::System);
    }

    #[test]
    fn test_category_name() {
        assert_eq!(ErrorCategory::General.name(), "general");
        assert_eq!(ErrorCategory::Store.name(), "store");
        assert_eq!(ErrorCategory::Schedule.name(), "schedule");
        assert_eq!(ErrorCategory::Holiday.name(), "holiday");
        assert_eq!(ErrorCategory::Special.name(), "special");
        assert_eq!(ErrorCategory::Settings.name(), "settings");
        assert_eq!(ErrorCategory::System.name(), "system");
    }

    #[test]
    fn test_category_serialize() {
        let category = ErrorCategory::Schedule;
        let json = serde_json::to_string(&category).unwrap();
        assert_eq!(json, "\"schedule\"");

        let category: ErrorCategory = serde_json::from_str("\"system\"").unwrap();
        assert_eq!(category, ErrorCategory::System);
    }
}
