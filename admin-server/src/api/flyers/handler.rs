//! Flyer API Handlers

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};

use crate::api::{json_body, query_params};
use crate::catalog::{FlyerFilter, FlyerView, MutationOutcome};
use crate::core::ServerState;
use crate::utils::{ApiResult, ok, ok_with_message};
use shared::models::{Flyer, FlyerCreate, FlyerUpdate};
use shared::query::Page;

/// GET /api/flyers - 传单列表 (search / status / storeId / collectionId / activeOnly)
pub async fn list(
    State(state): State<ServerState>,
    query: Result<Query<FlyerFilter>, QueryRejection>,
) -> ApiResult<Page<FlyerView>> {
    let filter = query_params(query)?;
    Ok(ok(state.catalog.list_flyers(&filter)))
}

/// GET /api/flyers/:id - 获取单个传单
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> ApiResult<FlyerView> {
    Ok(ok(state.catalog.get_flyer(&id)?))
}

/// POST /api/flyers - 创建传单
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<FlyerCreate>, JsonRejection>,
) -> ApiResult<MutationOutcome<FlyerView>> {
    let outcome = state.catalog.create_flyer(json_body(payload)?)?;
    Ok(ok_with_message(outcome, "Flyer created"))
}

/// PUT /api/flyers/:id - 更新传单 (折扣提高时通知门店关注者)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    payload: Result<Json<FlyerUpdate>, JsonRejection>,
) -> ApiResult<MutationOutcome<FlyerView>> {
    let outcome = state.catalog.update_flyer(&id, json_body(payload)?)?;
    Ok(ok_with_message(outcome, "Flyer updated"))
}

/// DELETE /api/flyers/:id - 删除传单
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> ApiResult<Flyer> {
    let flyer = state.catalog.delete_flyer(&id)?;
    Ok(ok_with_message(flyer, "Flyer deleted"))
}
