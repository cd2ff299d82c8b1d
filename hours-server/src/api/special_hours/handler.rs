//! Special Hours API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::convert::with_code;
use crate::core::ServerState;
use crate::db::repository::special_hours;
use shared::models::{SpecialHours, SpecialHoursCreate, SpecialHoursUpdate};
use shared::{AppError, AppResult, ErrorCode};

/// GET /api/stores/{store_id}/hours/special - 获取所有特殊日期覆盖
pub async fn list(
    State(state): State<ServerState>,
    Path(store_id): Path<String>,
) -> AppResult<Json<Vec<SpecialHours>>> {
    let overrides = special_hours::find_all(&state.pool, &store_id).await?;
    Ok(Json(overrides))
}

/// GET /api/stores/{store_id}/hours/special/{id} - 获取单个覆盖
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path((store_id, id)): Path<(String, i64)>,
) -> AppResult<Json<SpecialHours>> {
    let special = special_hours::find_by_id(&state.pool, &store_id, id)
        .await?
        .ok_or_else(|| {
            AppError::with_message(
                ErrorCode::SpecialHoursNotFound,
                format!("Special hours {id} not found"),
            )
        })?;
    Ok(Json(special))
}

/// POST /api/stores/{store_id}/hours/special - 创建特殊日期覆盖
///
/// 同一日期重复创建返回冲突，调用方应改用更新接口
pub async fn create(
    State(state): State<ServerState>,
    Path(store_id): Path<String>,
    Json(payload): Json<SpecialHoursCreate>,
) -> AppResult<Json<SpecialHours>> {
    let special = special_hours::create(&state.pool, &store_id, payload)
        .await
        .map_err(|e| with_code(e, ErrorCode::SpecialHoursNotFound, ErrorCode::SpecialDateExists))?;
    Ok(Json(special))
}

/// PUT /api/stores/{store_id}/hours/special/{id} - 更新特殊日期覆盖
pub async fn update(
    State(state): State<ServerState>,
    Path((store_id, id)): Path<(String, i64)>,
    Json(payload): Json<SpecialHoursUpdate>,
) -> AppResult<Json<SpecialHours>> {
    let special = special_hours::update(&state.pool, &store_id, id, payload)
        .await
        .map_err(|e| with_code(e, ErrorCode::SpecialHoursNotFound, ErrorCode::SpecialDateExists))?;
    Ok(Json(special))
}

/// DELETE /api/stores/{store_id}/hours/special/{id} - 删除特殊日期覆盖
pub async fn delete(
    State(state): State<ServerState>,
    Path((store_id, id)): Path<(String, i64)>,
) -> AppResult<Json<bool>> {
    special_hours::delete(&state.pool, &store_id, id)
        .await
        .map_err(|e| with_code(e, ErrorCode::SpecialHoursNotFound, ErrorCode::SpecialDateExists))?;
    Ok(Json(true))
}
