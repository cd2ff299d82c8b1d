//! Store Hours Settings Repository
//!
//! Singleton row per store. Reads never fail on a missing row: the
//! defaults are inserted on first access.

use super::{RepoError, RepoResult, decode_json, encode_json};
use shared::models::{
    DefaultHolidayAction, ServiceHolidayBehavior, StoreHoursSettings, TimeSlot,
};
use sqlx::SqlitePool;

#[derive(sqlx::FromRow)]
struct SettingsRow {
    observe_federal_holidays: bool,
    observe_provincial_holidays: bool,
    observe_municipal_holidays: bool,
    default_holiday_action: String,
    modified_holiday_hours: String,
    delivery_holiday_behavior: String,
    pickup_holiday_behavior: String,
}

impl SettingsRow {
    fn into_model(self) -> RepoResult<StoreHoursSettings> {
        let default_holiday_action: DefaultHolidayAction =
            self.default_holiday_action.parse().map_err(|e: String| {
                RepoError::Database(format!("Corrupt default_holiday_action column: {e}"))
            })?;
        let delivery_holiday_behavior: ServiceHolidayBehavior =
            self.delivery_holiday_behavior.parse().map_err(|e: String| {
                RepoError::Database(format!("Corrupt delivery_holiday_behavior column: {e}"))
            })?;
        let pickup_holiday_behavior: ServiceHolidayBehavior =
            self.pickup_holiday_behavior.parse().map_err(|e: String| {
                RepoError::Database(format!("Corrupt pickup_holiday_behavior column: {e}"))
            })?;
        let modified_holiday_hours: Vec<TimeSlot> =
            decode_json("modified_holiday_hours", &self.modified_holiday_hours)?;
        Ok(StoreHoursSettings {
            observe_federal_holidays: self.observe_federal_holidays,
            observe_provincial_holidays: self.observe_provincial_holidays,
            observe_municipal_holidays: self.observe_municipal_holidays,
            default_holiday_action,
            modified_holiday_hours,
            delivery_holiday_behavior,
            pickup_holiday_behavior,
        })
    }
}

const SELECT_COLUMNS: &str = "observe_federal_holidays, observe_provincial_holidays, observe_municipal_holidays, default_holiday_action, modified_holiday_hours, delivery_holiday_behavior, pickup_holiday_behavior";

/// Load a store's settings, inserting the defaults on first access
pub async fn get_or_create(pool: &SqlitePool, store_id: &str) -> RepoResult<StoreHoursSettings> {
    let row = sqlx::query_as::<_, SettingsRow>(&format!(
        "SELECT {SELECT_COLUMNS} FROM store_hours_settings WHERE store_id = ?"
    ))
    .bind(store_id)
    .fetch_optional(pool)
    .await?;

    if let Some(row) = row {
        return row.into_model();
    }

    let defaults = StoreHoursSettings::default();
    let now = shared::util::now_millis();
    // ON CONFLICT ignore: a concurrent first access may have won the race
    sqlx::query(
        "INSERT INTO store_hours_settings (store_id, observe_federal_holidays, observe_provincial_holidays, observe_municipal_holidays, default_holiday_action, modified_holiday_hours, delivery_holiday_behavior, pickup_holiday_behavior, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?9) ON CONFLICT(store_id) DO NOTHING",
    )
    .bind(store_id)
    .bind(defaults.observe_federal_holidays)
    .bind(defaults.observe_provincial_holidays)
    .bind(defaults.observe_municipal_holidays)
    .bind(defaults.default_holiday_action.as_str())
    .bind(encode_json("modified_holiday_hours", &defaults.modified_holiday_hours)?)
    .bind(defaults.delivery_holiday_behavior.as_str())
    .bind(defaults.pickup_holiday_behavior.as_str())
    .bind(now)
    .execute(pool)
    .await?;

    tracing::info!(store_id, "Seeded default store hours settings");
    Ok(defaults)
}

/// Full replace of a store's settings
pub async fn update(
    pool: &SqlitePool,
    store_id: &str,
    settings: StoreHoursSettings,
) -> RepoResult<StoreHoursSettings> {
    settings.validate()?;

    let now = shared::util::now_millis();
    sqlx::query(
        "INSERT INTO store_hours_settings (store_id, observe_federal_holidays, observe_provincial_holidays, observe_municipal_holidays, default_holiday_action, modified_holiday_hours, delivery_holiday_behavior, pickup_holiday_behavior, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?9) ON CONFLICT(store_id) DO UPDATE SET observe_federal_holidays = excluded.observe_federal_holidays, observe_provincial_holidays = excluded.observe_provincial_holidays, observe_municipal_holidays = excluded.observe_municipal_holidays, default_holiday_action = excluded.default_holiday_action, modified_holiday_hours = excluded.modified_holiday_hours, delivery_holiday_behavior = excluded.delivery_holiday_behavior, pickup_holiday_behavior = excluded.pickup_holiday_behavior, updated_at = excluded.updated_at",
    )
    .bind(store_id)
    .bind(settings.observe_federal_holidays)
    .bind(settings.observe_provincial_holidays)
    .bind(settings.observe_municipal_holidays)
    .bind(settings.default_holiday_action.as_str())
    .bind(encode_json("modified_holiday_hours", &settings.modified_holiday_hours)?)
    .bind(settings.delivery_holiday_behavior.as_str())
    .bind(settings.pickup_holiday_behavior.as_str())
    .bind(now)
    .execute(pool)
    .await?;

    Ok(settings)
}
