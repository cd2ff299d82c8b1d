//! Store Hours Settings Model (singleton per store)

use crate::error::{AppError, AppResult, ErrorCode};
use crate::models::holiday::HolidayType;
use crate::models::time_slot::{validate_slots, TimeSlot};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What happens on an observed holiday with no explicit override
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefaultHolidayAction {
    Closed,
    Modified,
    Open,
}

impl DefaultHolidayAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Closed => "closed",
            Self::Modified => "modified",
            Self::Open => "open",
        }
    }
}

impl fmt::Display for DefaultHolidayAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DefaultHolidayAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "closed" => Ok(Self::Closed),
            "modified" => Ok(Self::Modified),
            "open" => Ok(Self::Open),
            other => Err(format!("unknown holiday action: {other}")),
        }
    }
}

/// Delivery/pickup policy on observed holidays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceHolidayBehavior {
    SameAsStore,
    Closed,
    Modified,
}

impl ServiceHolidayBehavior {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SameAsStore => "same_as_store",
            Self::Closed => "closed",
            Self::Modified => "modified",
        }
    }
}

impl fmt::Display for ServiceHolidayBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceHolidayBehavior {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "same_as_store" => Ok(Self::SameAsStore),
            "closed" => Ok(Self::Closed),
            "modified" => Ok(Self::Modified),
            other => Err(format!("unknown service behavior: {other}")),
        }
    }
}

/// Holiday resolution policy for one store
///
/// All fields are required and defaulted at construction; "undefined means
/// default" is not a thing in this model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreHoursSettings {
    pub observe_federal_holidays: bool,
    pub observe_provincial_holidays: bool,
    pub observe_municipal_holidays: bool,
    pub default_holiday_action: DefaultHolidayAction,
    /// Slot set used when `default_holiday_action` is `modified`
    #[serde(default)]
    pub modified_holiday_hours: Vec<TimeSlot>,
    pub delivery_holiday_behavior: ServiceHolidayBehavior,
    pub pickup_holiday_behavior: ServiceHolidayBehavior,
}

impl Default for StoreHoursSettings {
    fn default() -> Self {
        Self {
            observe_federal_holidays: true,
            observe_provincial_holidays: true,
            observe_municipal_holidays: false,
            default_holiday_action: DefaultHolidayAction::Closed,
            modified_holiday_hours: Vec::new(),
            delivery_holiday_behavior: ServiceHolidayBehavior::SameAsStore,
            pickup_holiday_behavior: ServiceHolidayBehavior::SameAsStore,
        }
    }
}

impl StoreHoursSettings {
    /// Whether holidays of `holiday_type` are observed by this store
    pub fn observes(&self, holiday_type: HolidayType) -> bool {
        match holiday_type {
            HolidayType::Federal => self.observe_federal_holidays,
            HolidayType::Provincial => self.observe_provincial_holidays,
            HolidayType::Municipal => self.observe_municipal_holidays,
        }
    }

    /// Reject a `modified` default action with no modified slot set
    pub fn validate(&self) -> AppResult<()> {
        validate_slots(&self.modified_holiday_hours)?;
        if self.default_holiday_action == DefaultHolidayAction::Modified
            && self.modified_holiday_hours.is_empty()
        {
            return Err(AppError::new(ErrorCode::ModifiedHoursMissing));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::time_slot::hm;

    #[test]
    fn test_defaults() {
        let settings = StoreHoursSettings::default();
        assert!(settings.observe_federal_holidays);
        assert!(settings.observe_provincial_holidays);
        assert!(!settings.observe_municipal_holidays);
        assert_eq!(settings.default_holiday_action, DefaultHolidayAction::Closed);
        assert!(settings.modified_holiday_hours.is_empty());
        assert_eq!(
            settings.delivery_holiday_behavior,
            ServiceHolidayBehavior::SameAsStore
        );
        assert_eq!(
            settings.pickup_holiday_behavior,
            ServiceHolidayBehavior::SameAsStore
        );
    }

    #[test]
    fn test_observes() {
        let settings = StoreHoursSettings::default();
        assert!(settings.observes(HolidayType::Federal));
        assert!(settings.observes(HolidayType::Provincial));
        assert!(!settings.observes(HolidayType::Municipal));
    }

    #[test]
    fn test_validate_modified_requires_slots() {
        let settings = StoreHoursSettings {
            default_holiday_action: DefaultHolidayAction::Modified,
            ..Default::default()
        };
        assert_eq!(
            settings.validate().unwrap_err().code,
            ErrorCode::ModifiedHoursMissing
        );

        let settings = StoreHoursSettings {
            default_holiday_action: DefaultHolidayAction::Modified,
            modified_holiday_hours: vec![TimeSlot { open: hm(10, 0), close: hm(18, 0) }],
            ..Default::default()
        };
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_enum_serde_strings() {
        let json = serde_json::to_string(&DefaultHolidayAction::Modified).unwrap();
        assert_eq!(json, "\"modified\"");
        let json = serde_json::to_string(&ServiceHolidayBehavior::SameAsStore).unwrap();
        assert_eq!(json, "\"same_as_store\"");
    }

    #[test]
    fn test_enum_from_str() {
        assert_eq!("open".parse(), Ok(DefaultHolidayAction::Open));
        assert_eq!("same_as_store".parse(), Ok(ServiceHolidayBehavior::SameAsStore));
        assert!("weird".parse::<DefaultHolidayAction>().is_err());
    }
}
