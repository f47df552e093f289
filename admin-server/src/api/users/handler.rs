//! App user API Handlers

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};

use crate::api::{json_body, query_params};
use crate::catalog::{AppUserView, UserFilter};
use crate::core::ServerState;
use crate::utils::{ApiResult, ok, ok_with_message};
use shared::models::{AppUserCreate, AppUserUpdate};
use shared::query::Page;

/// GET /api/users - 用户列表
pub async fn list(
    State(state): State<ServerState>,
    query: Result<Query<UserFilter>, QueryRejection>,
) -> ApiResult<Page<AppUserView>> {
    let filter = query_params(query)?;
    Ok(ok(state.catalog.list_users(&filter)))
}

/// GET /api/users/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> ApiResult<AppUserView> {
    Ok(ok(state.catalog.get_user(&id)?))
}

/// POST /api/users
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<AppUserCreate>, JsonRejection>,
) -> ApiResult<AppUserView> {
    let user = state.catalog.create_user(json_body(payload)?)?;
    Ok(ok_with_message(user, "User created"))
}

/// PUT /api/users/:id
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    payload: Result<Json<AppUserUpdate>, JsonRejection>,
) -> ApiResult<AppUserView> {
    let user = state.catalog.update_user(&id, json_body(payload)?)?;
    Ok(ok_with_message(user, "User updated"))
}

/// DELETE /api/users/:id
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> ApiResult<AppUserView> {
    let user = state.catalog.delete_user(&id)?;
    Ok(ok_with_message(user, "User deleted"))
}
