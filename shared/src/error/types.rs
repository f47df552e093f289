//! Error types and API response structures

use super::codes::{ErrorCode, ErrorKind};
use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Application error with structured error code and details
///
/// This is the single error type of the catalog engine, providing:
/// - Standardized error codes via [`ErrorCode`]
/// - Human-readable messages (surfaced verbatim by the dashboard)
/// - Optional structured details for debugging
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details (field-level errors, counts, ids)
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    /// Coarse taxonomy of this error
    pub fn kind(&self) -> ErrorKind {
        self.code.kind()
    }

    // ==================== Convenience constructors ====================

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Create a generic not found error
    pub fn not_found(resource: impl Into<String>) -> Self {
        let r = resource.into();
        Self::with_message(ErrorCode::NotFound, format!("{} not found", r))
            .with_detail("resource", r)
    }

    /// Create an entity-specific not found error carrying the missing id
    pub fn missing(code: ErrorCode, id: impl Into<String>) -> Self {
        let id = id.into();
        Self::with_message(code, format!("{} ({})", code.message(), id)).with_detail("id", id)
    }

    /// Create a conflict error
    pub fn conflict(code: ErrorCode, msg: impl Into<String>) -> Self {
        Self::with_message(code, msg)
    }

    /// Create an already exists error
    pub fn already_exists(resource: impl Into<String>) -> Self {
        let r = resource.into();
        Self::with_message(ErrorCode::AlreadyExists, format!("{} already exists", r))
            .with_detail("resource", r)
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InternalError, msg)
    }

    /// Create an invalid request error
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidRequest, msg)
    }
}

/// Envelope `status` for successful responses
pub const STATUS_OK: u8 = 0;
/// Envelope `status` for failed responses
pub const STATUS_FAILED: u8 = 1;

/// Unified API response structure
///
/// Every endpoint answers with this envelope:
/// - `status`: 0 on success, 1 on failure (independent of the HTTP status)
/// - `message`: "Success", an action message, or the failure reason
/// - `data`: response payload (on success)
/// - `code` / `details`: error code and extra context (on failure)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// 0 for success, 1 for failure
    pub status: u8,
    /// Human-readable message
    pub message: String,
    /// Response data (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error code (present on failure)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
    /// Additional error details (present on failure)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Value>>,
}

impl<T> ApiResponse<T> {
    /// Create a success response with data
    pub fn success(data: T) -> Self {
        Self::success_with_message("Success", data)
    }

    /// Create a success response with custom message and data
    pub fn success_with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            status: STATUS_OK,
            message: message.into(),
            data: Some(data),
            code: None,
            details: None,
        }
    }

    /// Whether this envelope reports success
    pub fn is_success(&self) -> bool {
        self.status == STATUS_OK
    }
}

impl ApiResponse<()> {
    /// Create an error response from an AppError
    pub fn error(err: &AppError) -> Self {
        Self {
            status: STATUS_FAILED,
            message: err.message.clone(),
            data: None,
            code: Some(err.code.code()),
            details: err.details.clone(),
        }
    }
}

impl<T> From<AppError> for ApiResponse<T> {
    fn from(err: AppError) -> Self {
        Self {
            status: STATUS_FAILED,
            message: err.message,
            data: None,
            code: Some(err.code.code()),
            details: err.details,
        }
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

// ===== Axum Integration =====

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;

        let status = self.http_status();
        let body = ApiResponse::<()>::error(&self);

        // Log unexpected failures only; domain errors are routine
        if matches!(self.kind(), ErrorKind::Unexpected) {
            tracing::error!(
                code = %self.code,
                message = %self.message,
                "Unexpected error occurred"
            );
        }

        (status, Json(body)).into_response()
    }
}

impl<T: Serialize> axum::response::IntoResponse for ApiResponse<T> {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;

        let status = if self.status == STATUS_OK {
            http::StatusCode::OK
        } else {
            self.code
                .and_then(|c| ErrorCode::try_from(c).ok())
                .map(|c| c.http_status())
                .unwrap_or(http::StatusCode::INTERNAL_SERVER_ERROR)
        };

        (status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_new() {
        let err = AppError::new(ErrorCode::NotFound);
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Resource not found");
        assert!(err.details.is_none());
    }

    #[test]
    fn test_app_error_with_detail() {
        let err = AppError::conflict(ErrorCode::CategoryHasStores, "in use")
            .with_detail("storesCount", 3);

        assert_eq!(err.kind(), ErrorKind::Conflict);
        let details = err.details.unwrap();
        assert_eq!(details.get("storesCount").unwrap(), 3);
    }

    #[test]
    fn test_missing_carries_id() {
        let err = AppError::missing(ErrorCode::StoreNotFound, "store-9");
        assert_eq!(err.message, "Store not found (store-9)");
        assert_eq!(err.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(err.details.unwrap().get("id").unwrap(), "store-9");
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::validation("Price must be greater than 0");
        assert_eq!(format!("{}", err), "Price must be greater than 0");
    }

    #[test]
    fn test_api_response_success() {
        let response = ApiResponse::success(42);
        assert_eq!(response.status, 0);
        assert_eq!(response.message, "Success");
        assert_eq!(response.data, Some(42));
        assert!(response.is_success());
    }

    #[test]
    fn test_api_response_error() {
        let err = AppError::missing(ErrorCode::FlyerNotFound, "flyer-1");
        let response = ApiResponse::<()>::error(&err);

        assert_eq!(response.status, 1);
        assert_eq!(response.code, Some(4001));
        assert!(response.data.is_none());
        assert!(response.details.is_some());
    }

    #[test]
    fn test_api_response_serialize() {
        let json = serde_json::to_string(&ApiResponse::success("hello")).unwrap();
        assert_eq!(json, r#"{"status":0,"message":"Success","data":"hello"}"#);

        let err = AppError::validation("bad");
        let json = serde_json::to_string(&ApiResponse::<()>::error(&err)).unwrap();
        assert_eq!(json, r#"{"status":1,"message":"bad","code":2}"#);
    }

    #[test]
    fn test_api_response_deserialize() {
        let json = r#"{"status":0,"message":"Success","data":42}"#;
        let response: ApiResponse<i32> = serde_json::from_str(json).unwrap();
        assert_eq!(response.status, 0);
        assert_eq!(response.data, Some(42));
    }
}
