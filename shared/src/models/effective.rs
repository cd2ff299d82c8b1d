//! Effective Hours Model
//!
//! The resolver's output: the open/closed state and time windows for a
//! store and its delivery/pickup services on one calendar date.

use crate::models::time_slot::TimeSlot;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Which override tier produced the store's effective hours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HoursSource {
    Special,
    Holiday,
    Regular,
}

/// Resolved state for one service (store-wide, delivery, or pickup)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub is_closed: bool,
    #[serde(default)]
    pub time_slots: Vec<TimeSlot>,
}

impl ServiceStatus {
    pub fn closed() -> Self {
        Self {
            is_closed: true,
            time_slots: Vec::new(),
        }
    }

    pub fn open(time_slots: Vec<TimeSlot>) -> Self {
        Self {
            is_closed: false,
            time_slots,
        }
    }

    /// Open if `time` falls within ANY slot (union semantics)
    pub fn is_open_at(&self, time: NaiveTime) -> bool {
        !self.is_closed && self.time_slots.iter().any(|slot| slot.contains(time))
    }
}

/// The resolved schedule for one date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectiveHours {
    pub date: NaiveDate,
    /// Winning override tier, for admin UI display
    pub source: HoursSource,
    pub store: ServiceStatus,
    pub delivery: ServiceStatus,
    pub pickup: ServiceStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::time_slot::hm;

    #[test]
    fn test_closed_status() {
        let status = ServiceStatus::closed();
        assert!(status.is_closed);
        assert!(!status.is_open_at(hm(12, 0)));
    }

    #[test]
    fn test_union_of_slots() {
        let status = ServiceStatus::open(vec![
            TimeSlot { open: hm(9, 0), close: hm(12, 0) },
            TimeSlot { open: hm(17, 0), close: hm(21, 0) },
        ]);
        assert!(status.is_open_at(hm(10, 0)));
        assert!(!status.is_open_at(hm(14, 0)));
        assert!(status.is_open_at(hm(18, 30)));
    }

    #[test]
    fn test_source_serde() {
        assert_eq!(
            serde_json::to_string(&HoursSource::Special).unwrap(),
            "\"special\""
        );
        assert_eq!(
            serde_json::to_string(&HoursSource::Regular).unwrap(),
            "\"regular\""
        );
    }
}
