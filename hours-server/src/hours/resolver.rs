//! Effective Hours Resolver
//!
//! Pure precedence logic: given everything known about a store's schedule
//! and a target date, produce the effective open/closed state and time
//! windows for the store, delivery, and pickup.
//!
//! Precedence (first match wins):
//! 1. Special hours for the exact date
//! 2. An observed holiday on that date (explicit override or default action)
//! 3. The regular weekday entry
//!
//! The resolver performs no I/O and never mutates its inputs. Missing
//! data degrades to "closed"; only a store with no weekly schedule at all
//! is an error (configuration defect, not a business "closed" day).

use chrono::{Datelike, NaiveDate};
use shared::error::{AppError, AppResult};
use shared::models::{
    DefaultHolidayAction, EffectiveHours, Holiday, HolidayHours, HoursSource, RegularHours,
    ServiceHolidayBehavior, ServiceHours, ServiceStatus, SpecialHours, StoreHoursSettings,
    TimeSlot, day_index,
};

/// Everything the resolver needs, loaded by the caller
#[derive(Debug, Clone)]
pub struct ResolutionInput {
    /// The store's weekly schedule. Must not be empty; individual missing
    /// weekdays are tolerated and treated as closed.
    pub week: Vec<RegularHours>,
    pub settings: StoreHoursSettings,
    /// Calendar entries falling on the target date
    pub holidays: Vec<Holiday>,
    /// The store's explicit per-holiday overrides
    pub holiday_overrides: Vec<HolidayHours>,
    /// The store's special hours for the target date, if any
    pub special: Option<SpecialHours>,
}

/// The override tier that won precedence for a date
#[derive(Debug)]
enum OverrideTier<'a> {
    Special(&'a SpecialHours),
    Holiday {
        hours: Option<&'a HolidayHours>,
        regular: &'a RegularHours,
    },
    Regular(&'a RegularHours),
}

/// Resolve the effective hours for `date`
///
/// Errors only when the store has no weekly schedule at all; every other
/// gap degrades to closed. See [`AppError::schedule_unavailable`].
pub fn resolve(store_id: &str, date: NaiveDate, input: &ResolutionInput) -> AppResult<EffectiveHours> {
    if input.week.is_empty() {
        return Err(AppError::schedule_unavailable(store_id));
    }

    let weekday = day_index(date.weekday());
    let fallback = RegularHours::closed(weekday);
    let regular = input
        .week
        .iter()
        .find(|day| day.day_of_week == weekday)
        .unwrap_or(&fallback);

    let tier = select_tier(date, regular, input);

    let (source, store, delivery, pickup) = match tier {
        OverrideTier::Special(special) => {
            let store = status_from(special.is_closed, &special.time_slots);
            // No per-service fields exist at this tier: both mirror the store
            (HoursSource::Special, store.clone(), store.clone(), store)
        }
        OverrideTier::Holiday { hours, regular } => {
            let store = resolve_holiday_store(hours, regular, &input.settings);
            let delivery = resolve_holiday_service(
                input.settings.delivery_holiday_behavior,
                &store,
                regular.delivery_hours.as_ref(),
            );
            let pickup = resolve_holiday_service(
                input.settings.pickup_holiday_behavior,
                &store,
                regular.pickup_hours.as_ref(),
            );
            (HoursSource::Holiday, store, delivery, pickup)
        }
        OverrideTier::Regular(day) => {
            let store = status_from(day.is_closed, &day.time_slots);
            let delivery = resolve_regular_service(day, day.delivery_hours.as_ref());
            let pickup = resolve_regular_service(day, day.pickup_hours.as_ref());
            (HoursSource::Regular, store, delivery, pickup)
        }
    };

    Ok(EffectiveHours {
        date,
        source,
        store,
        delivery,
        pickup,
    })
}

/// Pick the winning tier for `date`
fn select_tier<'a>(
    date: NaiveDate,
    regular: &'a RegularHours,
    input: &'a ResolutionInput,
) -> OverrideTier<'a> {
    if let Some(special) = &input.special {
        if special.date == date {
            return OverrideTier::Special(special);
        }
    }

    let observed: Vec<&Holiday> = input
        .holidays
        .iter()
        .filter(|h| h.date == date && input.settings.observes(h.holiday_type))
        .collect();

    if !observed.is_empty() {
        // When several observed holidays share the date, one with an
        // explicit override wins over those falling back to the default
        let hours = observed.iter().find_map(|holiday| {
            input
                .holiday_overrides
                .iter()
                .find(|hh| hh.holiday_id == holiday.id)
        });
        return OverrideTier::Holiday { hours, regular };
    }

    OverrideTier::Regular(regular)
}

/// Store-level status on an observed holiday
fn resolve_holiday_store(
    hours: Option<&HolidayHours>,
    regular: &RegularHours,
    settings: &StoreHoursSettings,
) -> ServiceStatus {
    if let Some(hours) = hours {
        return status_from(hours.is_closed, &hours.time_slots);
    }
    match settings.default_holiday_action {
        DefaultHolidayAction::Closed => ServiceStatus::closed(),
        DefaultHolidayAction::Open => status_from(regular.is_closed, &regular.time_slots),
        DefaultHolidayAction::Modified => {
            status_from(false, &settings.modified_holiday_hours)
        }
    }
}

/// Delivery/pickup status on an observed holiday
///
/// `modified` has no holiday-specific slot field in the data model, so it
/// falls back to the matching weekday's own sub-hours.
fn resolve_holiday_service(
    behavior: ServiceHolidayBehavior,
    store: &ServiceStatus,
    weekday_service: Option<&ServiceHours>,
) -> ServiceStatus {
    match behavior {
        ServiceHolidayBehavior::SameAsStore => store.clone(),
        ServiceHolidayBehavior::Closed => ServiceStatus::closed(),
        ServiceHolidayBehavior::Modified => match weekday_service {
            Some(service) if service.enabled => status_from(false, &service.time_slots),
            _ => ServiceStatus::closed(),
        },
    }
}

/// Delivery/pickup status on a regular day: the day's own sub-hours when
/// enabled, closed otherwise. A closed store closes its services too.
fn resolve_regular_service(
    day: &RegularHours,
    service: Option<&ServiceHours>,
) -> ServiceStatus {
    if day.is_closed {
        return ServiceStatus::closed();
    }
    match service {
        Some(service) if service.enabled => status_from(false, &service.time_slots),
        _ => ServiceStatus::closed(),
    }
}

/// A closed flag with no slots, or an empty slot list, both mean closed
fn status_from(is_closed: bool, slots: &[TimeSlot]) -> ServiceStatus {
    if is_closed || slots.is_empty() {
        ServiceStatus::closed()
    } else {
        ServiceStatus::open(slots.to_vec())
    }
}
