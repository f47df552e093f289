//! App user Model (end users of the mobile app, not dashboard admins)

use serde::{Deserialize, Serialize};

use super::Location;

/// Account status of an app user
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountStatus {
    #[default]
    Active,
    Suspended,
    Pending,
}

/// App user entity
///
/// Liked flyer/store ids are plain references; they are not checked for
/// existence and are not cleaned up when the target is deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppUser {
    pub id: String,
    pub email: String,
    pub name: String,
    pub profile_image: Option<String>,
    pub location: Location,
    /// Preferred language code, e.g. "en"
    pub language: String,
    pub status: AccountStatus,
    pub liked_flyers: Vec<String>,
    pub liked_stores: Vec<String>,
    pub last_login_at: Option<i64>,
    pub last_active_at: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create app user payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppUserCreate {
    pub email: String,
    pub name: String,
    pub profile_image: Option<String>,
    #[serde(default)]
    pub location: Location,
    pub language: Option<String>,
    pub status: Option<AccountStatus>,
    #[serde(default)]
    pub liked_flyers: Vec<String>,
    #[serde(default)]
    pub liked_stores: Vec<String>,
}

/// Update app user payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppUserUpdate {
    pub email: Option<String>,
    pub name: Option<String>,
    pub profile_image: Option<String>,
    pub location: Option<Location>,
    pub language: Option<String>,
    pub status: Option<AccountStatus>,
    pub liked_flyers: Option<Vec<String>>,
    pub liked_stores: Option<Vec<String>>,
    pub last_login_at: Option<i64>,
    pub last_active_at: Option<i64>,
}
