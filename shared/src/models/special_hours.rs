//! Special Hours Override Model

use crate::error::{AppError, AppResult, ErrorCode};
use crate::models::time_slot::{validate_slots, TimeSlot};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One-off override for an exact calendar date
///
/// Highest precedence tier: beats both holiday overrides and the regular
/// weekly schedule. Unique per `(store, date)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecialHours {
    pub id: Option<i64>,
    pub date: NaiveDate,
    #[serde(default)]
    pub is_closed: bool,
    /// Free-text reason shown in the admin UI ("Staff event")
    pub reason: Option<String>,
    #[serde(default)]
    pub time_slots: Vec<TimeSlot>,
}

impl SpecialHours {
    pub fn validate(&self) -> AppResult<()> {
        validate_slots(&self.time_slots)?;
        if !self.is_closed && self.time_slots.is_empty() {
            return Err(AppError::new(ErrorCode::OpenDayWithoutSlots)
                .with_detail("date", self.date.to_string()));
        }
        Ok(())
    }
}

/// Create payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecialHoursCreate {
    pub date: NaiveDate,
    #[serde(default)]
    pub is_closed: bool,
    pub reason: Option<String>,
    #[serde(default)]
    pub time_slots: Vec<TimeSlot>,
}

/// Update payload (partial)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpecialHoursUpdate {
    pub date: Option<NaiveDate>,
    pub is_closed: Option<bool>,
    pub reason: Option<String>,
    pub time_slots: Option<Vec<TimeSlot>>,
}
