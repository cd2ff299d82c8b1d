//! Time Slot primitive

use crate::error::{AppError, AppResult, ErrorCode};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// A single open/close window within one day ("10:00" - "20:00").
///
/// Overnight-spanning slots are not supported: `open` must be strictly
/// before `close`. Slots within a day may overlap; openness is the union
/// of all slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    #[serde(with = "hhmm")]
    pub open: NaiveTime,
    #[serde(with = "hhmm")]
    pub close: NaiveTime,
}

impl TimeSlot {
    /// Create a validated slot
    pub fn new(open: NaiveTime, close: NaiveTime) -> AppResult<Self> {
        let slot = Self { open, close };
        slot.validate()?;
        Ok(slot)
    }

    /// Reject slots where open >= close
    pub fn validate(&self) -> AppResult<()> {
        if self.open >= self.close {
            return Err(AppError::with_message(
                ErrorCode::InvalidTimeSlot,
                format!(
                    "Time slot must open before it closes: {} >= {}",
                    self.open.format("%H:%M"),
                    self.close.format("%H:%M")
                ),
            ));
        }
        Ok(())
    }

    /// Whether `time` falls within this slot (open inclusive, close exclusive)
    pub fn contains(&self, time: NaiveTime) -> bool {
        self.open <= time && time < self.close
    }
}

/// Validate every slot in a list
pub fn validate_slots(slots: &[TimeSlot]) -> AppResult<()> {
    for slot in slots {
        slot.validate()?;
    }
    Ok(())
}

/// Serde adapter for "HH:MM" time strings
///
/// The admin frontend sends and displays times as "10:00"; seconds are
/// accepted on input for compatibility but never emitted.
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&time.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&s, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(&s, "%H:%M:%S"))
            .map_err(serde::de::Error::custom)
    }
}

/// Helper for building times from hour/minute literals.
///
/// Out-of-range input clamps to midnight instead of panicking; callers
/// pass compile-time constants.
pub fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_slot() {
        let slot = TimeSlot::new(hm(9, 0), hm(21, 0)).unwrap();
        assert_eq!(slot.open, hm(9, 0));
        assert_eq!(slot.close, hm(21, 0));
    }

    #[test]
    fn test_open_equals_close_rejected() {
        let err = TimeSlot::new(hm(10, 0), hm(10, 0)).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidTimeSlot);
    }

    #[test]
    fn test_open_after_close_rejected() {
        let err = TimeSlot::new(hm(20, 0), hm(10, 0)).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidTimeSlot);
    }

    #[test]
    fn test_contains() {
        let slot = TimeSlot::new(hm(10, 0), hm(20, 0)).unwrap();
        assert!(slot.contains(hm(10, 0)));
        assert!(slot.contains(hm(15, 30)));
        assert!(!slot.contains(hm(20, 0)));
        assert!(!slot.contains(hm(9, 59)));
    }

    #[test]
    fn test_validate_slots() {
        let slots = vec![
            TimeSlot { open: hm(9, 0), close: hm(12, 0) },
            TimeSlot { open: hm(13, 0), close: hm(21, 0) },
        ];
        assert!(validate_slots(&slots).is_ok());

        let bad = vec![TimeSlot { open: hm(12, 0), close: hm(9, 0) }];
        assert!(validate_slots(&bad).is_err());
    }

    #[test]
    fn test_overlapping_slots_permitted() {
        // Overlap within a day is not rejected; openness is the union.
        let slots = vec![
            TimeSlot { open: hm(9, 0), close: hm(14, 0) },
            TimeSlot { open: hm(12, 0), close: hm(21, 0) },
        ];
        assert!(validate_slots(&slots).is_ok());
    }

    #[test]
    fn test_serde_hhmm() {
        let slot = TimeSlot { open: hm(10, 0), close: hm(20, 0) };
        let json = serde_json::to_string(&slot).unwrap();
        assert_eq!(json, r#"{"open":"10:00","close":"20:00"}"#);

        let parsed: TimeSlot = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, slot);

        // Seconds accepted on input
        let parsed: TimeSlot =
            serde_json::from_str(r#"{"open":"10:00:00","close":"20:00:00"}"#).unwrap();
        assert_eq!(parsed, slot);
    }
}
