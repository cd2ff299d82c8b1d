//! Regular Weekly Schedule Model

use crate::error::{AppError, AppResult, ErrorCode};
use crate::models::time_slot::{hm, validate_slots, TimeSlot};
use serde::{Deserialize, Serialize};

/// Delivery or pickup sub-hours for one weekday
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceHours {
    pub enabled: bool,
    #[serde(default)]
    pub time_slots: Vec<TimeSlot>,
}

/// One weekday of the store's regular schedule
///
/// `day_of_week` uses 0=Sunday .. 6=Saturday, matching the frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegularHours {
    pub id: Option<i64>,
    pub day_of_week: u8,
    #[serde(default)]
    pub is_closed: bool,
    #[serde(default)]
    pub time_slots: Vec<TimeSlot>,
    pub delivery_hours: Option<ServiceHours>,
    pub pickup_hours: Option<ServiceHours>,
}

impl RegularHours {
    /// A closed day with no slots
    pub fn closed(day_of_week: u8) -> Self {
        Self {
            id: None,
            day_of_week,
            is_closed: true,
            time_slots: Vec::new(),
            delivery_hours: None,
            pickup_hours: None,
        }
    }

    /// An open day with a single store-wide slot
    pub fn open(day_of_week: u8, slot: TimeSlot) -> Self {
        Self {
            id: None,
            day_of_week,
            is_closed: false,
            time_slots: vec![slot],
            delivery_hours: None,
            pickup_hours: None,
        }
    }

    /// Validate one day: weekday in range, slots well-formed, and an open
    /// day must carry at least one slot
    pub fn validate(&self) -> AppResult<()> {
        if self.day_of_week > 6 {
            return Err(AppError::new(ErrorCode::InvalidWeekday)
                .with_detail("day_of_week", self.day_of_week));
        }
        validate_slots(&self.time_slots)?;
        if !self.is_closed && self.time_slots.is_empty() {
            return Err(AppError::new(ErrorCode::OpenDayWithoutSlots)
                .with_detail("day_of_week", self.day_of_week));
        }
        if let Some(delivery) = &self.delivery_hours {
            validate_slots(&delivery.time_slots)?;
        }
        if let Some(pickup) = &self.pickup_hours {
            validate_slots(&pickup.time_slots)?;
        }
        Ok(())
    }

    /// Default seed template: closed Sunday, 10-20 Saturday, 09-21 otherwise
    pub fn default_for_day(day_of_week: u8) -> Self {
        match day_of_week {
            0 => Self::closed(0),
            6 => Self::open(6, TimeSlot { open: hm(10, 0), close: hm(20, 0) }),
            d => Self::open(d, TimeSlot { open: hm(9, 0), close: hm(21, 0) }),
        }
    }

    /// Full default week, Sunday through Saturday
    pub fn default_week() -> Vec<Self> {
        (0u8..7).map(Self::default_for_day).collect()
    }
}

/// 0=Sunday .. 6=Saturday index for a chrono weekday
pub fn day_index(weekday: chrono::Weekday) -> u8 {
    weekday.num_days_from_sunday() as u8
}

/// Validate a whole-week replacement: every day valid, all seven weekdays
/// present exactly once
pub fn validate_week(days: &[RegularHours]) -> AppResult<()> {
    for day in days {
        day.validate()?;
    }
    let mut seen = [false; 7];
    for day in days {
        let idx = day.day_of_week as usize;
        if seen[idx] {
            return Err(AppError::new(ErrorCode::DuplicateWeekday)
                .with_detail("day_of_week", day.day_of_week));
        }
        seen[idx] = true;
    }
    if days.len() != 7 || seen.iter().any(|present| !present) {
        return Err(AppError::new(ErrorCode::ScheduleIncomplete));
    }
    Ok(())
}
