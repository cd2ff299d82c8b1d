//! Special Hours Repository
//!
//! One-off date overrides, unique per (store_id, date).

use super::{RepoError, RepoResult, decode_json, encode_json, parse_date};
use chrono::NaiveDate;
use shared::models::{SpecialHours, SpecialHoursCreate, SpecialHoursUpdate, TimeSlot};
use sqlx::SqlitePool;

#[derive(sqlx::FromRow)]
struct SpecialHoursRow {
    id: i64,
    date: String,
    is_closed: bool,
    reason: Option<String>,
    time_slots: String,
}

impl SpecialHoursRow {
    fn into_model(self) -> RepoResult<SpecialHours> {
        let time_slots: Vec<TimeSlot> = decode_json("time_slots", &self.time_slots)?;
        Ok(SpecialHours {
            id: Some(self.id),
            date: parse_date("date", &self.date)?,
            is_closed: self.is_closed,
            reason: self.reason,
            time_slots,
        })
    }
}

pub async fn find_all(pool: &SqlitePool, store_id: &str) -> RepoResult<Vec<SpecialHours>> {
    let rows = sqlx::query_as::<_, SpecialHoursRow>(
        "SELECT id, date, is_closed, reason, time_slots FROM special_hours WHERE store_id = ? ORDER BY date",
    )
    .bind(store_id)
    .fetch_all(pool)
    .await?;
    rows.into_iter().map(SpecialHoursRow::into_model).collect()
}

pub async fn find_by_id(
    pool: &SqlitePool,
    store_id: &str,
    id: i64,
) -> RepoResult<Option<SpecialHours>> {
    let row = sqlx::query_as::<_, SpecialHoursRow>(
        "SELECT id, date, is_closed, reason, time_slots FROM special_hours WHERE store_id = ? AND id = ?",
    )
    .bind(store_id)
    .bind(id)
    .fetch_optional(pool)
    .await?;
    row.map(SpecialHoursRow::into_model).transpose()
}

pub async fn find_by_date(
    pool: &SqlitePool,
    store_id: &str,
    date: NaiveDate,
) -> RepoResult<Option<SpecialHours>> {
    let row = sqlx::query_as::<_, SpecialHoursRow>(
        "SELECT id, date, is_closed, reason, time_slots FROM special_hours WHERE store_id = ? AND date = ?",
    )
    .bind(store_id)
    .bind(date.to_string())
    .fetch_optional(pool)
    .await?;
    row.map(SpecialHoursRow::into_model).transpose()
}

pub async fn create(
    pool: &SqlitePool,
    store_id: &str,
    data: SpecialHoursCreate,
) -> RepoResult<SpecialHours> {
    let special = SpecialHours {
        id: None,
        date: data.date,
        is_closed: data.is_closed,
        reason: data.reason,
        time_slots: data.time_slots,
    };
    special.validate()?;

    if find_by_date(pool, store_id, special.date).await?.is_some() {
        return Err(RepoError::Duplicate(format!(
            "Special hours already exist for {}",
            special.date
        )));
    }

    let now = shared::util::now_millis();
    let id = shared::util::snowflake_id();
    sqlx::query(
        "INSERT INTO special_hours (id, store_id, date, is_closed, reason, time_slots, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(id)
    .bind(store_id)
    .bind(special.date.to_string())
    .bind(special.is_closed)
    .bind(&special.reason)
    .bind(encode_json("time_slots", &special.time_slots)?)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;

    find_by_id(pool, store_id, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create special hours".into()))
}

pub async fn update(
    pool: &SqlitePool,
    store_id: &str,
    id: i64,
    data: SpecialHoursUpdate,
) -> RepoResult<SpecialHours> {
    let mut special = find_by_id(pool, store_id, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Special hours {id} not found")))?;

    if let Some(date) = data.date {
        // Moving to another date must not collide with an existing override
        if date != special.date && find_by_date(pool, store_id, date).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Special hours already exist for {date}"
            )));
        }
        special.date = date;
    }
    if let Some(is_closed) = data.is_closed {
        special.is_closed = is_closed;
    }
    if let Some(reason) = data.reason {
        special.reason = Some(reason);
    }
    if let Some(time_slots) = data.time_slots {
        special.time_slots = time_slots;
    }
    special.validate()?;

    let now = shared::util::now_millis();
    sqlx::query(
        "UPDATE special_hours SET date = ?, is_closed = ?, reason = ?, time_slots = ?, updated_at = ? WHERE store_id = ? AND id = ?",
    )
    .bind(special.date.to_string())
    .bind(special.is_closed)
    .bind(&special.reason)
    .bind(encode_json("time_slots", &special.time_slots)?)
    .bind(now)
    .bind(store_id)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(special)
}

pub async fn delete(pool: &SqlitePool, store_id: &str, id: i64) -> RepoResult<()> {
    let rows = sqlx::query("DELETE FROM special_hours WHERE store_id = ? AND id = ?")
        .bind(store_id)
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Special hours {id} not found")));
    }
    Ok(())
}
