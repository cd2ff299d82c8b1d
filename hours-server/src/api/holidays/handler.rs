//! Holiday Calendar API Handlers
//!
//! The calendar provider pushes the full year's entries with a single
//! PUT; individual entries are never edited in place.

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::db::repository::holiday;
use shared::AppResult;
use shared::models::{Holiday, HolidaySync};

/// GET /api/holidays - 获取节假日日历
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Holiday>>> {
    let holidays = holiday::find_all(&state.pool).await?;
    Ok(Json(holidays))
}

/// PUT /api/holidays - 整体替换节假日日历
pub async fn replace_all(
    State(state): State<ServerState>,
    Json(payload): Json<Vec<HolidaySync>>,
) -> AppResult<Json<Vec<Holiday>>> {
    let holidays = holiday::replace_all(&state.pool, payload).await?;
    Ok(Json(holidays))
}
