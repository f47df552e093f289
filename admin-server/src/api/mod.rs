//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`categories`] - 分类管理接口
//! - [`stores`] - 门店管理接口
//! - [`collections`] - 目录册管理接口
//! - [`flyers`] - 传单管理接口
//! - [`users`] - App 用户管理接口
//! - [`notifications`] - 通知管理接口 (含 cancel / send-now)
//! - [`dashboard`] - 仪表盘统计
//! - [`admin`] - 一致性检查

use axum::Json;
use axum::extract::Query;
use axum::extract::rejection::{JsonRejection, QueryRejection};

use crate::utils::{AppError, AppResult};

pub mod admin;
pub mod categories;
pub mod collections;
pub mod dashboard;
pub mod flyers;
pub mod health;
pub mod notifications;
pub mod stores;
pub mod users;

/// Unwrap a query extractor, turning rejections into the error envelope
pub(crate) fn query_params<T>(query: Result<Query<T>, QueryRejection>) -> AppResult<T> {
    query
        .map(|Query(value)| value)
        .map_err(|e| AppError::invalid_request(e.body_text()))
}

/// Unwrap a JSON body extractor, turning rejections into the error envelope
pub(crate) fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> AppResult<T> {
    body.map(|Json(value)| value)
        .map_err(|e| AppError::invalid_request(e.body_text()))
}
