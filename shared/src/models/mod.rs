//! Domain models for store operating hours
//!
//! # Override tiers
//!
//! | Tier | Model | Precedence |
//! |------|-------|------------|
//! | Special | [`SpecialHours`] | highest (exact date) |
//! | Holiday | [`HolidayHours`] + [`StoreHoursSettings`] | observed holidays |
//! | Regular | [`RegularHours`] | weekday default |

pub mod effective;
pub mod holiday;
pub mod holiday_hours;
pub mod regular_hours;
pub mod settings;
pub mod special_hours;
pub mod time_slot;

pub use effective::{EffectiveHours, HoursSource, ServiceStatus};
pub use holiday::{Holiday, HolidaySync, HolidayType};
pub use holiday_hours::{HolidayHours, HolidayHoursCreate, HolidayHoursUpdate};
pub use regular_hours::{day_index, validate_week, RegularHours, ServiceHours};
pub use settings::{DefaultHolidayAction, ServiceHolidayBehavior, StoreHoursSettings};
pub use special_hours::{SpecialHours, SpecialHoursCreate, SpecialHoursUpdate};
pub use time_slot::{validate_slots, TimeSlot};
