//! Holiday Hours Repository
//!
//! Per-holiday overrides, unique per (store_id, holiday_id).

use super::{RepoError, RepoResult, decode_json, encode_json};
use shared::models::{HolidayHours, HolidayHoursCreate, HolidayHoursUpdate, TimeSlot};
use sqlx::SqlitePool;

#[derive(sqlx::FromRow)]
struct HolidayHoursRow {
    id: i64,
    holiday_id: i64,
    is_closed: bool,
    time_slots: String,
}

impl HolidayHoursRow {
    fn into_model(self) -> RepoResult<HolidayHours> {
        let time_slots: Vec<TimeSlot> = decode_json("time_slots", &self.time_slots)?;
        Ok(HolidayHours {
            id: Some(self.id),
            holiday_id: self.holiday_id,
            is_closed: self.is_closed,
            time_slots,
        })
    }
}

pub async fn find_all(pool: &SqlitePool, store_id: &str) -> RepoResult<Vec<HolidayHours>> {
    let rows = sqlx::query_as::<_, HolidayHoursRow>(
        "SELECT id, holiday_id, is_closed, time_slots FROM holiday_hours WHERE store_id = ? ORDER BY id",
    )
    .bind(store_id)
    .fetch_all(pool)
    .await?;
    rows.into_iter().map(HolidayHoursRow::into_model).collect()
}

pub async fn find_by_id(
    pool: &SqlitePool,
    store_id: &str,
    id: i64,
) -> RepoResult<Option<HolidayHours>> {
    let row = sqlx::query_as::<_, HolidayHoursRow>(
        "SELECT id, holiday_id, is_closed, time_slots FROM holiday_hours WHERE store_id = ? AND id = ?",
    )
    .bind(store_id)
    .bind(id)
    .fetch_optional(pool)
    .await?;
    row.map(HolidayHoursRow::into_model).transpose()
}

pub async fn find_by_holiday(
    pool: &SqlitePool,
    store_id: &str,
    holiday_id: i64,
) -> RepoResult<Option<HolidayHours>> {
    let row = sqlx::query_as::<_, HolidayHoursRow>(
        "SELECT id, holiday_id, is_closed, time_slots FROM holiday_hours WHERE store_id = ? AND holiday_id = ?",
    )
    .bind(store_id)
    .bind(holiday_id)
    .fetch_optional(pool)
    .await?;
    row.map(HolidayHoursRow::into_model).transpose()
}

pub async fn create(
    pool: &SqlitePool,
    store_id: &str,
    data: HolidayHoursCreate,
) -> RepoResult<HolidayHours> {
    let hours = HolidayHours {
        id: None,
        holiday_id: data.holiday_id,
        is_closed: data.is_closed,
        time_slots: data.time_slots,
    };
    hours.validate()?;

    // The override must reference an existing calendar entry
    if super::holiday::find_by_id(pool, hours.holiday_id).await?.is_none() {
        return Err(RepoError::NotFound(format!(
            "Holiday {} not found",
            hours.holiday_id
        )));
    }

    if find_by_holiday(pool, store_id, hours.holiday_id).await?.is_some() {
        return Err(RepoError::Duplicate(format!(
            "Holiday hours already exist for holiday {}",
            hours.holiday_id
        )));
    }

    let now = shared::util::now_millis();
    let id = shared::util::snowflake_id();
    sqlx::query(
        "INSERT INTO holiday_hours (id, store_id, holiday_id, is_closed, time_slots, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(id)
    .bind(store_id)
    .bind(hours.holiday_id)
    .bind(hours.is_closed)
    .bind(encode_json("time_slots", &hours.time_slots)?)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;

    find_by_id(pool, store_id, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create holiday hours".into()))
}

pub async fn update(
    pool: &SqlitePool,
    store_id: &str,
    id: i64,
    data: HolidayHoursUpdate,
) -> RepoResult<HolidayHours> {
    let mut hours = find_by_id(pool, store_id, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Holiday hours {id} not found")))?;

    if let Some(is_closed) = data.is_closed {
        hours.is_closed = is_closed;
    }
    if let Some(time_slots) = data.time_slots {
        hours.time_slots = time_slots;
    }
    hours.validate()?;

    let now = shared::util::now_millis();
    sqlx::query(
        "UPDATE holiday_hours SET is_closed = ?, time_slots = ?, updated_at = ? WHERE store_id = ? AND id = ?",
    )
    .bind(hours.is_closed)
    .bind(encode_json("time_slots", &hours.time_slots)?)
    .bind(now)
    .bind(store_id)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(hours)
}

pub async fn delete(pool: &SqlitePool, store_id: &str, id: i64) -> RepoResult<()> {
    let rows = sqlx::query("DELETE FROM holiday_hours WHERE store_id = ? AND id = ?")
        .bind(store_id)
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Holiday hours {id} not found")));
    }
    Ok(())
}
