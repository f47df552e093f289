//! Collection API Handlers

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};

use crate::api::{json_body, query_params};
use crate::catalog::{CollectionFilter, CollectionRemoval, CollectionView, MutationOutcome};
use crate::core::ServerState;
use crate::utils::{ApiResult, ok, ok_with_message};
use shared::models::{CollectionCreate, CollectionUpdate};
use shared::query::Page;

/// GET /api/collections - 目录册列表 (search / status / storeId / categoryId)
pub async fn list(
    State(state): State<ServerState>,
    query: Result<Query<CollectionFilter>, QueryRejection>,
) -> ApiResult<Page<CollectionView>> {
    let filter = query_params(query)?;
    Ok(ok(state.catalog.list_collections(&filter)))
}

/// GET /api/collections/:id - 获取单个目录册
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> ApiResult<CollectionView> {
    Ok(ok(state.catalog.get_collection(&id)?))
}

/// POST /api/collections - 创建目录册 (通知门店关注者)
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<CollectionCreate>, JsonRejection>,
) -> ApiResult<MutationOutcome<CollectionView>> {
    let outcome = state.catalog.create_collection(json_body(payload)?)?;
    Ok(ok_with_message(outcome, "Collection created"))
}

/// PUT /api/collections/:id - 更新目录册
///
/// 更换门店时，其下传单的 storeId 一并更新。
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    payload: Result<Json<CollectionUpdate>, JsonRejection>,
) -> ApiResult<MutationOutcome<CollectionView>> {
    let outcome = state.catalog.update_collection(&id, json_body(payload)?)?;
    Ok(ok_with_message(outcome, "Collection updated"))
}

/// DELETE /api/collections/:id - 删除目录册及其全部传单
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> ApiResult<CollectionRemoval> {
    let removal = state.catalog.delete_collection(&id)?;
    Ok(ok_with_message(removal, "Collection deleted"))
}
