//! Hours resolution service
//!
//! [`resolver`] holds the pure precedence logic; this module loads its
//! inputs from the repositories.

pub mod resolver;

pub use resolver::{ResolutionInput, resolve};

use crate::db::repository::{self, RepoResult};
use chrono::NaiveDate;
use sqlx::SqlitePool;

/// Load everything the resolver needs for one store and date
pub async fn load_inputs(
    pool: &SqlitePool,
    store_id: &str,
    date: NaiveDate,
) -> RepoResult<ResolutionInput> {
    let week = repository::regular_hours::get_week(pool, store_id).await?;
    let settings = repository::settings::get_or_create(pool, store_id).await?;
    let holidays = repository::holiday::find_by_date(pool, date).await?;
    let holiday_overrides = repository::holiday_hours::find_all(pool, store_id).await?;
    let special = repository::special_hours::find_by_date(pool, store_id, date).await?;

    Ok(ResolutionInput {
        week,
        settings,
        holidays,
        holiday_overrides,
        special,
    })
}
