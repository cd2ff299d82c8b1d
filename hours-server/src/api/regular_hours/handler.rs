//! Regular Hours API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::repository::regular_hours;
use shared::{AppError, AppResult, ErrorCode};
use shared::models::RegularHours;

/// GET /api/stores/{store_id}/hours/regular - 获取整周营业时间
///
/// 总是返回 7 条记录 (周日..周六)，首次访问时播种默认模板
pub async fn get_week(
    State(state): State<ServerState>,
    Path(store_id): Path<String>,
) -> AppResult<Json<Vec<RegularHours>>> {
    let week = regular_hours::get_week(&state.pool, &store_id).await?;
    Ok(Json(week))
}

/// PUT /api/stores/{store_id}/hours/regular - 整周原子替换
pub async fn replace_week(
    State(state): State<ServerState>,
    Path(store_id): Path<String>,
    Json(payload): Json<Vec<RegularHours>>,
) -> AppResult<Json<Vec<RegularHours>>> {
    let week = regular_hours::replace_week(&state.pool, &store_id, payload).await?;
    Ok(Json(week))
}

/// PUT /api/stores/{store_id}/hours/regular/{day_of_week} - 更新单个工作日
pub async fn update_day(
    State(state): State<ServerState>,
    Path((store_id, day_of_week)): Path<(String, u8)>,
    Json(payload): Json<RegularHours>,
) -> AppResult<Json<RegularHours>> {
    // Path and body must agree on the weekday
    if payload.day_of_week != day_of_week {
        return Err(AppError::new(ErrorCode::InvalidWeekday)
            .with_detail("path", day_of_week)
            .with_detail("body", payload.day_of_week));
    }

    let day = regular_hours::update_day(&state.pool, &store_id, payload).await?;
    Ok(Json(day))
}
