//! Category API Handlers

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};

use crate::api::{json_body, query_params};
use crate::catalog::{CategoryFilter, CategoryView};
use crate::core::ServerState;
use crate::utils::{ApiResult, ok, ok_with_message};
use shared::models::{Category, CategoryCreate, CategoryUpdate};
use shared::query::Page;

/// GET /api/categories - 分类列表 (search / status / 分页)
pub async fn list(
    State(state): State<ServerState>,
    query: Result<Query<CategoryFilter>, QueryRejection>,
) -> ApiResult<Page<CategoryView>> {
    let filter = query_params(query)?;
    Ok(ok(state.catalog.list_categories(&filter)))
}

/// GET /api/categories/:id - 获取单个分类
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> ApiResult<CategoryView> {
    Ok(ok(state.catalog.get_category(&id)?))
}

/// POST /api/categories - 创建分类
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<CategoryCreate>, JsonRejection>,
) -> ApiResult<CategoryView> {
    let category = state.catalog.create_category(json_body(payload)?)?;
    Ok(ok_with_message(category, "Category created"))
}

/// PUT /api/categories/:id - 更新分类
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    payload: Result<Json<CategoryUpdate>, JsonRejection>,
) -> ApiResult<CategoryView> {
    let category = state.catalog.update_category(&id, json_body(payload)?)?;
    Ok(ok_with_message(category, "Category updated"))
}

/// DELETE /api/categories/:id - 删除分类 (仍有门店引用时拒绝)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> ApiResult<Category> {
    let category = state.catalog.delete_category(&id)?;
    Ok(ok_with_message(category, "Category deleted"))
}
