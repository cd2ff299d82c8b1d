//! Effective Hours API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::core::ServerState;
use crate::hours;
use shared::models::EffectiveHours;
use shared::{AppError, AppResult};

/// Query params for the effective hours lookup
#[derive(Debug, Deserialize)]
pub struct EffectiveQuery {
    /// ISO "YYYY-MM-DD"
    pub date: String,
}

/// GET /api/stores/{store_id}/hours/effective?date=YYYY-MM-DD
///
/// 解析指定日期的生效营业时间 (门店/配送/自提)
pub async fn get(
    State(state): State<ServerState>,
    Path(store_id): Path<String>,
    Query(query): Query<EffectiveQuery>,
) -> AppResult<Json<EffectiveHours>> {
    let date: NaiveDate = query
        .date
        .parse()
        .map_err(|_| AppError::invalid_format(format!("Invalid date: {}", query.date)))?;

    let input = hours::load_inputs(&state.pool, &store_id, date).await?;
    let effective = hours::resolve(&store_id, date, &input)?;
    Ok(Json(effective))
}
