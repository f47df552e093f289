//! Unified error codes for the deals admin backend
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Category errors
//! - 2xxx: Store errors
//! - 3xxx: Collection errors
//! - 4xxx: Flyer errors
//! - 5xxx: App user errors
//! - 6xxx: Notification errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse error taxonomy every code maps onto
///
/// The dashboard only distinguishes these four outcomes (plus success);
/// the numeric code adds detail for logs and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    None,
    NotFound,
    Conflict,
    Validation,
    Unexpected,
}

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Category ====================
    /// Category not found
    CategoryNotFound = 1001,
    /// Category name already exists (case-insensitive)
    CategoryNameExists = 1002,
    /// Category is still referenced by stores
    CategoryHasStores = 1003,

    // ==================== 2xxx: Store ====================
    /// Store not found
    StoreNotFound = 2001,
    /// Store name already exists
    StoreNameExists = 2002,
    /// Store is still referenced by collections
    StoreHasCollections = 2003,

    // ==================== 3xxx: Collection ====================
    /// Collection not found
    CollectionNotFound = 3001,
    /// Thumbnail flyer does not belong to the collection
    ThumbnailNotInCollection = 3002,

    // ==================== 4xxx: Flyer ====================
    /// Flyer not found
    FlyerNotFound = 4001,
    /// Flyer price must be greater than zero
    FlyerInvalidPrice = 4002,
    /// Discount percentage outside [0, 100]
    FlyerInvalidDiscount = 4003,
    /// End date not after start date
    FlyerInvalidWindow = 4004,

    // ==================== 5xxx: App user ====================
    /// App user not found
    UserNotFound = 5001,
    /// Email already registered
    UserEmailExists = 5002,

    // ==================== 6xxx: Notification ====================
    /// Notification not found
    NotificationNotFound = 6001,
    /// Notification can no longer be edited or deleted
    NotificationNotEditable = 6002,
    /// Action only legal on scheduled notifications
    NotificationNotScheduled = 6003,
    /// Scheduled time is not in the future
    NotificationScheduleInPast = 6004,
    /// Target audience could not be resolved
    AudienceUnresolved = 6005,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Configuration error
    ConfigError = 9005,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Map the code onto the coarse taxonomy
    pub const fn kind(&self) -> ErrorKind {
        match self {
            ErrorCode::Success => ErrorKind::None,

            ErrorCode::NotFound
            | ErrorCode::CategoryNotFound
            | ErrorCode::StoreNotFound
            | ErrorCode::CollectionNotFound
            | ErrorCode::FlyerNotFound
            | ErrorCode::UserNotFound
            | ErrorCode::NotificationNotFound => ErrorKind::NotFound,

            ErrorCode::AlreadyExists
            | ErrorCode::CategoryNameExists
            | ErrorCode::CategoryHasStores
            | ErrorCode::StoreNameExists
            | ErrorCode::StoreHasCollections
            | ErrorCode::UserEmailExists
            | ErrorCode::NotificationNotEditable
            | ErrorCode::NotificationNotScheduled
            | ErrorCode::AudienceUnresolved => ErrorKind::Conflict,

            ErrorCode::ValidationFailed
            | ErrorCode::InvalidRequest
            | ErrorCode::InvalidFormat
            | ErrorCode::RequiredField
            | ErrorCode::ValueOutOfRange
            | ErrorCode::ThumbnailNotInCollection
            | ErrorCode::FlyerInvalidPrice
            | ErrorCode::FlyerInvalidDiscount
            | ErrorCode::FlyerInvalidWindow
            | ErrorCode::NotificationScheduleInPast => ErrorKind::Validation,

            ErrorCode::Unknown
            | ErrorCode::InternalError
            | ErrorCode::ConfigError => ErrorKind::Unexpected,
        }
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Category
            ErrorCode::CategoryNotFound => "Category not found",
            ErrorCode::CategoryNameExists => "Category name already exists",
            ErrorCode::CategoryHasStores => "Category is used by stores",

            // Store
            ErrorCode::StoreNotFound => "Store not found",
            ErrorCode::StoreNameExists => "Store name already exists",
            ErrorCode::StoreHasCollections => "Store still has collections",

            // Collection
            ErrorCode::CollectionNotFound => "Collection not found",
            ErrorCode::ThumbnailNotInCollection => {
                "Thumbnail flyer does not belong to this collection"
            }

            // Flyer
            ErrorCode::FlyerNotFound => "Flyer not found",
            ErrorCode::FlyerInvalidPrice => "Price must be greater than 0",
            ErrorCode::FlyerInvalidDiscount => "Discount must be between 0 and 100",
            ErrorCode::FlyerInvalidWindow => "End date must be after start date",

            // App user
            ErrorCode::UserNotFound => "User not found",
            ErrorCode::UserEmailExists => "Email already registered",

            // Notification
            ErrorCode::NotificationNotFound => "Notification not found",
            ErrorCode::NotificationNotEditable => {
                "Only draft or scheduled notifications can be changed"
            }
            ErrorCode::NotificationNotScheduled => "Can only act on scheduled notifications",
            ErrorCode::NotificationScheduleInPast => "Scheduled time must be in the future",
            ErrorCode::AudienceUnresolved => "Target audience could not be resolved",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Category
            1001 => Ok(ErrorCode::CategoryNotFound),
            1002 => Ok(ErrorCode::CategoryNameExists),
            1003 => Ok(ErrorCode::CategoryHasStores),

            // Store
            2001 => Ok(ErrorCode::StoreNotFound),
            2002 => Ok(ErrorCode::StoreNameExists),
            2003 => Ok(ErrorCode::StoreHasCollections),

            // Collection
            3001 => Ok(ErrorCode::CollectionNotFound),
            3002 => Ok(ErrorCode::ThumbnailNotInCollection),

            // Flyer
            4001 => Ok(ErrorCode::FlyerNotFound),
            4002 => Ok(ErrorCode::FlyerInvalidPrice),
            4003 => Ok(ErrorCode::FlyerInvalidDiscount),
            4004 => Ok(ErrorCode::FlyerInvalidWindow),

            // App user
            5001 => Ok(ErrorCode::UserNotFound),
            5002 => Ok(ErrorCode::UserEmailExists),

            // Notification
            6001 => Ok(ErrorCode::NotificationNotFound),
            6002 => Ok(ErrorCode::NotificationNotEditable),
            6003 => Ok(ErrorCode::NotificationNotScheduled),
            6004 => Ok(ErrorCode::NotificationScheduleInPast),
            6005 => Ok(ErrorCode::AudienceUnresolved),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9005 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::NotFound.code(), 3);
        assert_eq!(ErrorCode::CategoryHasStores.code(), 1003);
        assert_eq!(ErrorCode::StoreHasCollections.code(), 2003);
        assert_eq!(ErrorCode::FlyerInvalidWindow.code(), 4004);
        assert_eq!(ErrorCode::NotificationNotScheduled.code(), 6003);
        assert_eq!(ErrorCode::InternalError.code(), 9001);
    }

    #[test]
    fn test_kind_mapping() {
        assert_eq!(ErrorCode::Success.kind(), ErrorKind::None);
        assert_eq!(ErrorCode::FlyerNotFound.kind(), ErrorKind::NotFound);
        assert_eq!(ErrorCode::CategoryNameExists.kind(), ErrorKind::Conflict);
        assert_eq!(ErrorCode::NotificationNotScheduled.kind(), ErrorKind::Conflict);
        assert_eq!(ErrorCode::FlyerInvalidPrice.kind(), ErrorKind::Validation);
        assert_eq!(ErrorCode::InternalError.kind(), ErrorKind::Unexpected);
        assert_eq!(ErrorCode::AudienceUnresolved.kind(), ErrorKind::Conflict);
    }

    #[test]
    fn test_try_from_valid() {
        assert_eq!(ErrorCode::try_from(0), Ok(ErrorCode::Success));
        assert_eq!(ErrorCode::try_from(1003), Ok(ErrorCode::CategoryHasStores));
        assert_eq!(ErrorCode::try_from(6002), Ok(ErrorCode::NotificationNotEditable));
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(999), Err(InvalidErrorCode(999)));
        assert_eq!(ErrorCode::try_from(7001), Err(InvalidErrorCode(7001)));
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&ErrorCode::StoreNotFound).unwrap();
        assert_eq!(json, "2001");

        let code: ErrorCode = serde_json::from_str("4003").unwrap();
        assert_eq!(code, ErrorCode::FlyerInvalidDiscount);

        let result: Result<ErrorCode, _> = serde_json::from_str("10000");
        assert!(result.is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", ErrorCode::Success), "0");
        assert_eq!(format!("{}", ErrorCode::UserEmailExists), "5002");
    }

    #[test]
    fn test_message() {
        assert_eq!(ErrorCode::NotFound.message(), "Resource not found");
        assert_eq!(
            ErrorCode::FlyerInvalidWindow.message(),
            "End date must be after start date"
        );
    }
}
