//! Holiday Hours API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::convert::with_code;
use crate::core::ServerState;
use crate::db::repository::holiday_hours;
use shared::models::{HolidayHours, HolidayHoursCreate, HolidayHoursUpdate};
use shared::{AppError, AppResult, ErrorCode};

/// GET /api/stores/{store_id}/hours/holiday - 获取所有节假日覆盖
pub async fn list(
    State(state): State<ServerState>,
    Path(store_id): Path<String>,
) -> AppResult<Json<Vec<HolidayHours>>> {
    let overrides = holiday_hours::find_all(&state.pool, &store_id).await?;
    Ok(Json(overrides))
}

/// GET /api/stores/{store_id}/hours/holiday/{id} - 获取单个覆盖
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path((store_id, id)): Path<(String, i64)>,
) -> AppResult<Json<HolidayHours>> {
    let hours = holiday_hours::find_by_id(&state.pool, &store_id, id)
        .await?
        .ok_or_else(|| {
            AppError::with_message(
                ErrorCode::HolidayHoursNotFound,
                format!("Holiday hours {id} not found"),
            )
        })?;
    Ok(Json(hours))
}

/// POST /api/stores/{store_id}/hours/holiday - 创建节假日覆盖
pub async fn create(
    State(state): State<ServerState>,
    Path(store_id): Path<String>,
    Json(payload): Json<HolidayHoursCreate>,
) -> AppResult<Json<HolidayHours>> {
    let hours = holiday_hours::create(&state.pool, &store_id, payload)
        .await
        .map_err(|e| with_code(e, ErrorCode::HolidayNotFound, ErrorCode::HolidayHoursExists))?;
    Ok(Json(hours))
}

/// PUT /api/stores/{store_id}/hours/holiday/{id} - 更新节假日覆盖
pub async fn update(
    State(state): State<ServerState>,
    Path((store_id, id)): Path<(String, i64)>,
    Json(payload): Json<HolidayHoursUpdate>,
) -> AppResult<Json<HolidayHours>> {
    let hours = holiday_hours::update(&state.pool, &store_id, id, payload)
        .await
        .map_err(|e| {
            with_code(e, ErrorCode::HolidayHoursNotFound, ErrorCode::HolidayHoursExists)
        })?;
    Ok(Json(hours))
}

/// DELETE /api/stores/{store_id}/hours/holiday/{id} - 删除节假日覆盖
pub async fn delete(
    State(state): State<ServerState>,
    Path((store_id, id)): Path<(String, i64)>,
) -> AppResult<Json<bool>> {
    holiday_hours::delete(&state.pool, &store_id, id)
        .await
        .map_err(|e| {
            with_code(e, ErrorCode::HolidayHoursNotFound, ErrorCode::HolidayHoursExists)
        })?;
    Ok(Json(true))
}
