//! Notification API 模块
//!
//! # 路由列表
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/notifications | GET/POST | 列表 / 创建 (草稿、定时或立即发送) |
//! | /api/notifications/{id} | GET/PUT/DELETE | 仅草稿和定时状态可编辑、删除 |
//! | /api/notifications/{id}/cancel | POST | 取消定时通知 |
//! | /api/notifications/{id}/send-now | POST | 立即发送定时通知 |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/notifications", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
        .route("/{id}/cancel", post(handler::cancel))
        .route("/{id}/send-now", post(handler::send_now))
}
