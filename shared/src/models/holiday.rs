//! Holiday Calendar Model
//!
//! The calendar itself is supplied externally (synced wholesale by the
//! platform's calendar provider); the hours service only reads it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Holiday jurisdiction level, matched against the store's observance flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HolidayType {
    Federal,
    Provincial,
    Municipal,
}

impl HolidayType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Federal => "federal",
            Self::Provincial => "provincial",
            Self::Municipal => "municipal",
        }
    }
}

impl fmt::Display for HolidayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HolidayType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "federal" => Ok(Self::Federal),
            "provincial" => Ok(Self::Provincial),
            "municipal" => Ok(Self::Municipal),
            other => Err(format!("unknown holiday type: {other}")),
        }
    }
}

/// A named calendar entry with its resolved date for the current year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holiday {
    pub id: i64,
    pub name: String,
    pub holiday_type: HolidayType,
    pub date: NaiveDate,
}

/// One entry of a wholesale calendar sync (ids are assigned server-side)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HolidaySync {
    pub name: String,
    pub holiday_type: HolidayType,
    pub date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holiday_type_strings() {
        assert_eq!(HolidayType::Federal.as_str(), "federal");
        assert_eq!("provincial".parse::<HolidayType>(), Ok(HolidayType::Provincial));
        assert!("statutory".parse::<HolidayType>().is_err());
    }

    #[test]
    fn test_holiday_serde() {
        let holiday = Holiday {
            id: 1,
            name: "Christmas Day".to_string(),
            holiday_type: HolidayType::Federal,
            date: NaiveDate::from_ymd_opt(2024, 12, 25).unwrap(),
        };
        let json = serde_json::to_string(&holiday).unwrap();
        assert!(json.contains("\"holiday_type\":\"federal\""));
        assert!(json.contains("\"date\":\"2024-12-25\""));

        let parsed: Holiday = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, holiday);
    }
}
