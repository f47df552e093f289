//! 统一错误处理
//!
//! Re-exports the shared error system and adds the success helpers handlers
//! use to build the `{ status: 0, message, data }` envelope.
//!
//! # 使用示例
//!
//! ```ignore
//! // 返回错误
//! Err(AppError::missing(ErrorCode::StoreNotFound, id))
//!
//! // 返回成功响应
//! Ok(ok(store))
//! ```

use axum::Json;
use serde::Serialize;

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode, ErrorKind};

/// Handler return type: envelope on success, `AppError` on failure
pub type ApiResult<T> = AppResult<Json<ApiResponse<T>>>;

/// Create a successful response
pub fn ok<T: Serialize>(data: T) -> Json<ApiResponse<T>> {
    Json(ApiResponse::success(data))
}

/// Create a successful response with custom message
pub fn ok_with_message<T: Serialize>(data: T, message: impl Into<String>) -> Json<ApiResponse<T>> {
    Json(ApiResponse::success_with_message(message, data))
}
