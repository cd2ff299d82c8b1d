//! Holiday Hours Override Model

use crate::error::{AppError, AppResult, ErrorCode};
use crate::models::time_slot::{validate_slots, TimeSlot};
use serde::{Deserialize, Serialize};

/// Per-holiday override of the store's hours
///
/// At most one override may exist per holiday per store. An explicit
/// override always beats the settings-level `default_holiday_action`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HolidayHours {
    pub id: Option<i64>,
    /// References an entry of the externally supplied holiday calendar
    pub holiday_id: i64,
    #[serde(default)]
    pub is_closed: bool,
    #[serde(default)]
    pub time_slots: Vec<TimeSlot>,
}

impl HolidayHours {
    /// Slots well-formed; an open override needs at least one slot
    pub fn validate(&self) -> AppResult<()> {
        validate_slots(&self.time_slots)?;
        if !self.is_closed && self.time_slots.is_empty() {
            return Err(AppError::new(ErrorCode::OpenDayWithoutSlots)
                .with_detail("holiday_id", self.holiday_id));
        }
        Ok(())
    }
}

/// Create payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HolidayHoursCreate {
    pub holiday_id: i64,
    #[serde(default)]
    pub is_closed: bool,
    #[serde(default)]
    pub time_slots: Vec<TimeSlot>,
}

/// Update payload (partial)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HolidayHoursUpdate {
    pub is_closed: Option<bool>,
    pub time_slots: Option<Vec<TimeSlot>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::time_slot::hm;

    #[test]
    fn test_validate_closed_without_slots() {
        let hh = HolidayHours {
            id: None,
            holiday_id: 1,
            is_closed: true,
            time_slots: Vec::new(),
        };
        assert!(hh.validate().is_ok());
    }

    #[test]
    fn test_validate_open_without_slots() {
        let hh = HolidayHours {
            id: None,
            holiday_id: 1,
            is_closed: false,
            time_slots: Vec::new(),
        };
        let err = hh.validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::OpenDayWithoutSlots);
    }

    #[test]
    fn test_validate_bad_slot() {
        let hh = HolidayHours {
            id: None,
            holiday_id: 1,
            is_closed: false,
            time_slots: vec![TimeSlot { open: hm(18, 0), close: hm(10, 0) }],
        };
        let err = hh.validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidTimeSlot);
    }
}
