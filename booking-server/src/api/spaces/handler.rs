//! Space Pricing API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::SpacePricingConfig;

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

/// GET /api/spaces - 获取所有空间定价配置
pub async fn list(State(state): State<ServerState>) -> Json<Vec<SpacePricingConfig>> {
    Json(state.catalog.list())
}

/// GET /api/spaces/:space_type - 获取单个空间定价配置
pub async fn get_by_type(
    State(state): State<ServerState>,
    Path(space_type): Path<String>,
) -> AppResult<Json<SpacePricingConfig>> {
    let config = state
        .catalog
        .get(&space_type)
        .ok_or_else(|| AppError::space_not_found(&space_type))?;
    Ok(Json(config))
}

/// PUT /api/spaces/:space_type - 新增或替换空间定价配置
///
/// 并发更新以最后一次写入为准
pub async fn upsert(
    State(state): State<ServerState>,
    Path(space_type): Path<String>,
    Json(mut payload): Json<SpacePricingConfig>,
) -> AppResult<Json<SpacePricingConfig>> {
    if payload.space_type.is_empty() {
        payload.space_type = space_type.clone();
    } else if payload.space_type != space_type {
        return Err(AppError::validation(format!(
            "spaceType {} does not match path {}",
            payload.space_type, space_type
        ))
        .with_detail("spaceType", payload.space_type));
    }

    state.catalog.upsert(payload.clone())?;
    Ok(Json(payload))
}
