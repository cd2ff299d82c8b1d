//! HTTP status mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            ErrorCode::Success => StatusCode::OK,

            // Validation-style errors (400)
            ErrorCode::ValidationFailed
            | ErrorCode::InvalidRequest
            | ErrorCode::InvalidFormat
            | ErrorCode::RequiredField
            | ErrorCode::ValueOutOfRange
            | ErrorCode::ScheduleIncomplete
            | ErrorCode::DuplicateWeekday
            | ErrorCode::InvalidWeekday
            | ErrorCode::InvalidTimeSlot
            | ErrorCode::OpenDayWithoutSlots
            | ErrorCode::ModifiedHoursMissing => StatusCode::BAD_REQUEST,

            // Not found (404)
            ErrorCode::NotFound
            | ErrorCode::StoreNotFound
            | ErrorCode::HolidayNotFound
            | ErrorCode::HolidayHoursNotFound
            | ErrorCode::SpecialHoursNotFound => StatusCode::NOT_FOUND,

            // Conflicts (409)
            ErrorCode::AlreadyExists
            | ErrorCode::HolidayHoursExists
            | ErrorCode::SpecialDateExists => StatusCode::CONFLICT,

            // Missing weekly schedule is a configuration defect, not a
            // business "closed" day (500)
            ErrorCode::ScheduleUnavailable => StatusCode::INTERNAL_SERVER_ERROR,

            // System errors (500)
            ErrorCode::Unknown
            | ErrorCode::InternalError
            | ErrorCode::DatabaseError
            | ErrorCode::ConfigError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status() {
        assert_eq!(ErrorCode::Success.http_status(), StatusCode::OK);
        assert_eq!(
            ErrorCode::ValidationFailed.http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ErrorCode::NotFound.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ErrorCode::SpecialDateExists.http_status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ErrorCode::ScheduleUnavailable.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ErrorCode::DatabaseError.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
