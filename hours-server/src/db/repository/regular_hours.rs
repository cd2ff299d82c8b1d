//! Regular Hours Repository
//!
//! Weekly baseline schedule, one row per (store_id, day_of_week).
//! Reads degrade gracefully: a store with no rows gets the seeded
//! default week, and partial weeks are gap-filled in memory.

use super::{RepoError, RepoResult, decode_json, decode_json_opt, encode_json};
use shared::models::{RegularHours, ServiceHours, TimeSlot, validate_week};
use sqlx::SqlitePool;

#[derive(sqlx::FromRow)]
struct RegularHoursRow {
    id: i64,
    day_of_week: i64,
    is_closed: bool,
    time_slots: String,
    delivery_hours: Option<String>,
    pickup_hours: Option<String>,
}

impl RegularHoursRow {
    fn into_model(self) -> RepoResult<RegularHours> {
        let time_slots: Vec<TimeSlot> = decode_json("time_slots", &self.time_slots)?;
        let delivery_hours: Option<ServiceHours> =
            decode_json_opt("delivery_hours", self.delivery_hours.as_deref())?;
        let pickup_hours: Option<ServiceHours> =
            decode_json_opt("pickup_hours", self.pickup_hours.as_deref())?;
        Ok(RegularHours {
            id: Some(self.id),
            day_of_week: self.day_of_week as u8,
            is_closed: self.is_closed,
            time_slots,
            delivery_hours,
            pickup_hours,
        })
    }
}

const SELECT_COLUMNS: &str =
    "id, day_of_week, is_closed, time_slots, delivery_hours, pickup_hours";

/// Load the full week for a store, ordered Sunday..Saturday.
///
/// An empty store is seeded with the default week (persisted). Missing
/// individual days are filled with per-day defaults in memory only.
pub async fn get_week(pool: &SqlitePool, store_id: &str) -> RepoResult<Vec<RegularHours>> {
    let rows = sqlx::query_as::<_, RegularHoursRow>(&format!(
        "SELECT {SELECT_COLUMNS} FROM regular_hours WHERE store_id = ? ORDER BY day_of_week"
    ))
    .bind(store_id)
    .fetch_all(pool)
    .await?;

    if rows.is_empty() {
        return seed_default_week(pool, store_id).await;
    }

    let mut by_day: Vec<Option<RegularHours>> = vec![None; 7];
    for row in rows {
        let day = row.day_of_week;
        if !(0..7).contains(&day) {
            return Err(RepoError::Database(format!(
                "Corrupt day_of_week {day} for store {store_id}"
            )));
        }
        by_day[day as usize] = Some(row.into_model()?);
    }

    Ok(by_day
        .into_iter()
        .enumerate()
        .map(|(day, entry)| entry.unwrap_or_else(|| RegularHours::default_for_day(day as u8)))
        .collect())
}

/// Load one weekday, or `None` if the store has no row for it
pub async fn find_day(
    pool: &SqlitePool,
    store_id: &str,
    day_of_week: u8,
) -> RepoResult<Option<RegularHours>> {
    let row = sqlx::query_as::<_, RegularHoursRow>(&format!(
        "SELECT {SELECT_COLUMNS} FROM regular_hours WHERE store_id = ? AND day_of_week = ?"
    ))
    .bind(store_id)
    .bind(day_of_week as i64)
    .fetch_optional(pool)
    .await?;
    row.map(RegularHoursRow::into_model).transpose()
}

/// Replace the whole week atomically
///
/// The payload must contain exactly seven valid entries with unique
/// weekdays. Existing rows for the store are deleted first.
pub async fn replace_week(
    pool: &SqlitePool,
    store_id: &str,
    week: Vec<RegularHours>,
) -> RepoResult<Vec<RegularHours>> {
    validate_week(&week)?;

    let now = shared::util::now_millis();
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM regular_hours WHERE store_id = ?")
        .bind(store_id)
        .execute(&mut *tx)
        .await?;

    for day in &week {
        sqlx::query(
            "INSERT INTO regular_hours (id, store_id, day_of_week, is_closed, time_slots, delivery_hours, pickup_hours, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(shared::util::snowflake_id())
        .bind(store_id)
        .bind(day.day_of_week as i64)
        .bind(day.is_closed)
        .bind(encode_json("time_slots", &day.time_slots)?)
        .bind(
            day.delivery_hours
                .as_ref()
                .map(|h| encode_json("delivery_hours", h))
                .transpose()?,
        )
        .bind(
            day.pickup_hours
                .as_ref()
                .map(|h| encode_json("pickup_hours", h))
                .transpose()?,
        )
        .bind(now)
        .bind(now)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    get_week(pool, store_id).await
}

/// Upsert a single weekday
pub async fn update_day(
    pool: &SqlitePool,
    store_id: &str,
    data: RegularHours,
) -> RepoResult<RegularHours> {
    data.validate()?;

    let now = shared::util::now_millis();
    sqlx::query(
        "INSERT INTO regular_hours (id, store_id, day_of_week, is_closed, time_slots, delivery_hours, pickup_hours, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?8) ON CONFLICT(store_id, day_of_week) DO UPDATE SET is_closed = excluded.is_closed, time_slots = excluded.time_slots, delivery_hours = excluded.delivery_hours, pickup_hours = excluded.pickup_hours, updated_at = excluded.updated_at",
    )
    .bind(shared::util::snowflake_id())
    .bind(store_id)
    .bind(data.day_of_week as i64)
    .bind(data.is_closed)
    .bind(encode_json("time_slots", &data.time_slots)?)
    .bind(
        data.delivery_hours
            .as_ref()
            .map(|h| encode_json("delivery_hours", h))
            .transpose()?,
    )
    .bind(
        data.pickup_hours
            .as_ref()
            .map(|h| encode_json("pickup_hours", h))
            .transpose()?,
    )
    .bind(now)
    .execute(pool)
    .await?;

    find_day(pool, store_id, data.day_of_week)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to upsert regular hours".into()))
}

/// Seed and persist the default week for a store with no rows
async fn seed_default_week(pool: &SqlitePool, store_id: &str) -> RepoResult<Vec<RegularHours>> {
    let week = RegularHours::default_week();
    let now = shared::util::now_millis();
    let mut tx = pool.begin().await?;

    for day in &week {
        // ON CONFLICT ignore: a concurrent seeder may have won the race
        sqlx::query(
            "INSERT INTO regular_hours (id, store_id, day_of_week, is_closed, time_slots, delivery_hours, pickup_hours, created_at, updated_at) VALUES (?, ?, ?, ?, ?, NULL, NULL, ?, ?) ON CONFLICT(store_id, day_of_week) DO NOTHING",
        )
        .bind(shared::util::snowflake_id())
        .bind(store_id)
        .bind(day.day_of_week as i64)
        .bind(day.is_closed)
        .bind(encode_json("time_slots", &day.time_slots)?)
        .bind(now)
        .bind(now)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    tracing::info!(store_id, "Seeded default regular hours week");

    let rows = sqlx::query_as::<_, RegularHoursRow>(&format!(
        "SELECT {SELECT_COLUMNS} FROM regular_hours WHERE store_id = ? ORDER BY day_of_week"
    ))
    .bind(store_id)
    .fetch_all(pool)
    .await?;
    rows.into_iter().map(RegularHoursRow::into_model).collect()
}
