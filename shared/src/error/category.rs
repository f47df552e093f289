//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - 0xxx: General errors
/// - 1xxx: Category errors
/// - 2xxx: Store errors
/// - 3xxx: Collection errors
/// - 4xxx: Flyer errors
/// - 5xxx: App user errors
/// - 6xxx: Notification errors
/// - 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Category errors (1xxx)
    Category,
    /// Store errors (2xxx)
    Store,
    /// Collection errors (3xxx)
    Collection,
    /// Flyer errors (4xxx)
    Flyer,
    /// App user errors (5xxx)
    User,
    /// Notification errors (6xxx)
    Notification,
    /// System errors (7xxx and above)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Category,
            2000..3000 => Self::Store,
            3000..4000 => Self::Collection,
            4000..5000 => Self::Flyer,
            5000..6000 => Self::User,
            6000..7000 => Self::Notification,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Category => "category",
            Self::Store => "store",
            Self::Collection => "collection",
            Self::Flyer => "flyer",
            Self::User => "user",
            Self::Notification => "notification",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}
