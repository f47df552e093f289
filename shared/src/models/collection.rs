//! Collection Model

use serde::{Deserialize, Serialize};

use super::Status;

/// Collection entity
///
/// `flyersCount` and `thumbnailFlyerId` are maintained by the integrity rules
/// whenever flyers are added, moved or removed; clients cannot set the count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    pub id: String,
    pub name: String,
    pub store_id: String,
    /// Legacy category reference, optional
    pub category_id: Option<String>,
    pub thumbnail_flyer_id: Option<String>,
    pub flyers_count: u32,
    pub status: Status,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create collection payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionCreate {
    pub name: String,
    pub store_id: String,
    pub category_id: Option<String>,
    pub status: Option<Status>,
}

/// Update collection payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionUpdate {
    pub name: Option<String>,
    pub store_id: Option<String>,
    pub category_id: Option<String>,
    /// Must reference a flyer of this collection
    pub thumbnail_flyer_id: Option<String>,
    pub status: Option<Status>,
}
