//! Unified error system for the deals admin backend
//!
//! This module provides:
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorKind`]: The coarse taxonomy (not found / conflict / validation / unexpected)
//! - [`ErrorCategory`]: Classification of errors by entity
//! - [`AppError`]: Rich error type with codes, messages, and details
//! - [`ApiResponse`]: The `{ status, message, data }` response envelope
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Category errors
//! - 2xxx: Store errors
//! - 3xxx: Collection errors
//! - 4xxx: Flyer errors
//! - 5xxx: App user errors
//! - 6xxx: Notification errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{ApiResponse, AppError, ErrorCode};
//!
//! let err = AppError::missing(ErrorCode::StoreNotFound, "store-1");
//! let response = ApiResponse::<()>::error(&err);
//! assert_eq!(response.status, 1);
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, ErrorKind, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult, STATUS_FAILED, STATUS_OK};
