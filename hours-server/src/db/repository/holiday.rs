//! Holiday Calendar Repository
//!
//! The calendar is global (not store-scoped) and replaced wholesale by
//! the platform's calendar sync, never edited entry-by-entry.

use super::{RepoError, RepoResult, parse_date};
use chrono::NaiveDate;
use shared::models::{Holiday, HolidaySync, HolidayType};
use sqlx::SqlitePool;

#[derive(sqlx::FromRow)]
struct HolidayRow {
    id: i64,
    name: String,
    holiday_type: String,
    date: String,
}

impl HolidayRow {
    fn into_model(self) -> RepoResult<Holiday> {
        let holiday_type: HolidayType = self
            .holiday_type
            .parse()
            .map_err(|e: String| RepoError::Database(format!("Corrupt holiday_type column: {e}")))?;
        Ok(Holiday {
            id: self.id,
            name: self.name,
            holiday_type,
            date: parse_date("date", &self.date)?,
        })
    }
}

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Holiday>> {
    let rows = sqlx::query_as::<_, HolidayRow>(
        "SELECT id, name, holiday_type, date FROM holiday ORDER BY date, id",
    )
    .fetch_all(pool)
    .await?;
    rows.into_iter().map(HolidayRow::into_model).collect()
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Holiday>> {
    let row = sqlx::query_as::<_, HolidayRow>(
        "SELECT id, name, holiday_type, date FROM holiday WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    row.map(HolidayRow::into_model).transpose()
}

/// All calendar entries falling on one date (distinct jurisdictions may
/// share a date)
pub async fn find_by_date(pool: &SqlitePool, date: NaiveDate) -> RepoResult<Vec<Holiday>> {
    let rows = sqlx::query_as::<_, HolidayRow>(
        "SELECT id, name, holiday_type, date FROM holiday WHERE date = ? ORDER BY id",
    )
    .bind(date.to_string())
    .fetch_all(pool)
    .await?;
    rows.into_iter().map(HolidayRow::into_model).collect()
}

/// Replace the whole calendar atomically
pub async fn replace_all(pool: &SqlitePool, entries: Vec<HolidaySync>) -> RepoResult<Vec<Holiday>> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM holiday").execute(&mut *tx).await?;

    for entry in &entries {
        sqlx::query("INSERT INTO holiday (id, name, holiday_type, date) VALUES (?, ?, ?, ?)")
            .bind(shared::util::snowflake_id())
            .bind(&entry.name)
            .bind(entry.holiday_type.as_str())
            .bind(entry.date.to_string())
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;
    tracing::info!(count = entries.len(), "Holiday calendar replaced");
    find_all(pool).await
}
