//! Store API Handlers
//!
//! Create/update responses carry the auto-notifications the mutation
//! triggered under `triggeredNotifications`.

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};

use crate::api::{json_body, query_params};
use crate::catalog::{MutationOutcome, StoreFilter, StoreView};
use crate::core::ServerState;
use crate::utils::{ApiResult, ok, ok_with_message};
use shared::models::{Store, StoreCreate, StoreUpdate};
use shared::query::Page;

/// GET /api/stores - 门店列表 (search / status / categoryId / city)
pub async fn list(
    State(state): State<ServerState>,
    query: Result<Query<StoreFilter>, QueryRejection>,
) -> ApiResult<Page<StoreView>> {
    let filter = query_params(query)?;
    Ok(ok(state.catalog.list_stores(&filter)))
}

/// GET /api/stores/:id - 获取单个门店
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> ApiResult<StoreView> {
    Ok(ok(state.catalog.get_store(&id)?))
}

/// POST /api/stores - 创建门店 (通知所有用户)
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<StoreCreate>, JsonRejection>,
) -> ApiResult<MutationOutcome<StoreView>> {
    let outcome = state.catalog.create_store(json_body(payload)?)?;
    Ok(ok_with_message(outcome, "Store created"))
}

/// PUT /api/stores/:id - 更新门店
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    payload: Result<Json<StoreUpdate>, JsonRejection>,
) -> ApiResult<MutationOutcome<StoreView>> {
    let outcome = state.catalog.update_store(&id, json_body(payload)?)?;
    Ok(ok_with_message(outcome, "Store updated"))
}

/// DELETE /api/stores/:id - 删除门店 (仍有目录册时拒绝)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> ApiResult<Store> {
    let store = state.catalog.delete_store(&id)?;
    Ok(ok_with_message(store, "Store deleted"))
}
