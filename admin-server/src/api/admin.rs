//! 维护路由 - 数据一致性检查

use axum::{Router, extract::State, routing::get};

use crate::catalog::IntegrityReport;
use crate::core::ServerState;
use crate::utils::{ApiResult, ok};

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/admin/integrity", get(integrity))
}

/// GET /api/admin/integrity - 检查计数、缩略图与门店引用是否一致
async fn integrity(State(state): State<ServerState>) -> ApiResult<IntegrityReport> {
    Ok(ok(state.catalog.check_integrity()))
}
