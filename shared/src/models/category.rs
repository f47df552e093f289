//! Category Model

use serde::{Deserialize, Serialize};

use super::Status;

/// Category entity
///
/// `storesCount` is not stored here; it is derived per read from the stores
/// referencing the category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    /// Unique, compared case-insensitively
    pub name: String,
    pub image: Option<String>,
    pub status: Status,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create category payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCreate {
    pub name: String,
    pub image: Option<String>,
    pub status: Option<Status>,
}

/// Update category payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryUpdate {
    pub name: Option<String>,
    pub image: Option<String>,
    pub status: Option<Status>,
}
