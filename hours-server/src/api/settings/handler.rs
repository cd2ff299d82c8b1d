//! Store Hours Settings API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::repository::settings;
use shared::AppResult;
use shared::models::StoreHoursSettings;

/// GET /api/stores/{store_id}/hours/settings - 获取营业时间策略
///
/// 首次访问时返回并持久化默认策略
pub async fn get(
    State(state): State<ServerState>,
    Path(store_id): Path<String>,
) -> AppResult<Json<StoreHoursSettings>> {
    let s = settings::get_or_create(&state.pool, &store_id).await?;
    Ok(Json(s))
}

/// PUT /api/stores/{store_id}/hours/settings - 整体替换策略
pub async fn update(
    State(state): State<ServerState>,
    Path(store_id): Path<String>,
    Json(payload): Json<StoreHoursSettings>,
) -> AppResult<Json<StoreHoursSettings>> {
    let s = settings::update(&state.pool, &store_id, payload).await?;
    Ok(Json(s))
}
