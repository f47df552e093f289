//! HTTP status code mapping for error codes

use super::codes::{ErrorCode, ErrorKind};
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    ///
    /// The dashboard treats conflicts like validation failures, so both map
    /// to 400; only missing records get 404.
    pub fn http_status(&self) -> StatusCode {
        match self.kind() {
            ErrorKind::None => StatusCode::OK,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Conflict | ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::Unexpected => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_status() {
        assert_eq!(ErrorCode::Success.http_status(), StatusCode::OK);
    }

    #[test]
    fn test_not_found_status() {
        assert_eq!(ErrorCode::NotFound.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ErrorCode::CollectionNotFound.http_status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ErrorCode::NotificationNotFound.http_status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_conflict_is_bad_request() {
        assert_eq!(
            ErrorCode::CategoryHasStores.http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ErrorCode::NotificationNotScheduled.http_status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_validation_status() {
        assert_eq!(
            ErrorCode::FlyerInvalidWindow.http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ErrorCode::ValidationFailed.http_status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_internal_error_status() {
        assert_eq!(
            ErrorCode::InternalError.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_unresolved_audience_is_client_error() {
        assert_eq!(
            ErrorCode::AudienceUnresolved.http_status(),
            StatusCode::BAD_REQUEST
        );
    }
}
