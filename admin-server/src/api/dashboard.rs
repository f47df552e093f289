//! 仪表盘统计路由

use axum::{Router, extract::State, routing::get};

use crate::catalog::DashboardStats;
use crate::core::ServerState;
use crate::utils::{ApiResult, ok};

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/dashboard/stats", get(stats))
}

/// GET /api/dashboard/stats - 各实体总数、当前有效传单数、按状态分组计数
async fn stats(State(state): State<ServerState>) -> ApiResult<DashboardStats> {
    Ok(ok(state.catalog.dashboard_stats()))
}
