//! Notification API Handlers

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};

use crate::api::{json_body, query_params};
use crate::catalog::NotificationFilter;
use crate::core::ServerState;
use crate::utils::{ApiResult, ok, ok_with_message};
use shared::models::{Notification, NotificationCreate, NotificationUpdate};
use shared::query::Page;

/// GET /api/notifications - 通知列表 (search / status / type / targetType / dateFrom / dateTo)
pub async fn list(
    State(state): State<ServerState>,
    query: Result<Query<NotificationFilter>, QueryRejection>,
) -> ApiResult<Page<Notification>> {
    let filter = query_params(query)?;
    Ok(ok(state.catalog.list_notifications(&filter)?))
}

/// GET /api/notifications/:id - 获取单个通知
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> ApiResult<Notification> {
    Ok(ok(state.catalog.get_notification(&id)?))
}

/// POST /api/notifications - 创建通知
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<NotificationCreate>, JsonRejection>,
) -> ApiResult<Notification> {
    let notification = state.catalog.create_notification(json_body(payload)?)?;
    Ok(ok_with_message(notification, "Notification created"))
}

/// PUT /api/notifications/:id - 更新通知 (仅草稿 / 定时)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    payload: Result<Json<NotificationUpdate>, JsonRejection>,
) -> ApiResult<Notification> {
    let notification = state.catalog.update_notification(&id, json_body(payload)?)?;
    Ok(ok_with_message(notification, "Notification updated"))
}

/// DELETE /api/notifications/:id - 删除通知 (仅草稿 / 定时)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> ApiResult<Notification> {
    let notification = state.catalog.delete_notification(&id)?;
    Ok(ok_with_message(notification, "Notification deleted"))
}

/// POST /api/notifications/:id/cancel - 取消定时通知
pub async fn cancel(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> ApiResult<Notification> {
    let notification = state.catalog.cancel_notification(&id)?;
    Ok(ok_with_message(notification, "Notification cancelled"))
}

/// POST /api/notifications/:id/send-now - 立即发送定时通知
pub async fn send_now(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> ApiResult<Notification> {
    let notification = state.catalog.send_notification_now(&id)?;
    Ok(ok_with_message(notification, "Notification sent"))
}
