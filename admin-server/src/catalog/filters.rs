//! Listing filters (query string shapes)
//!
//! One struct per listing endpoint. `page`/`limit` sit directly on each
//! filter rather than in a flattened struct so numeric query values decode.

use serde::Deserialize;
use shared::models::{AccountStatus, NotificationStatus, NotificationType, Status, TargetType};
use shared::query::PageParams;

pub const DEFAULT_CATALOG_LIMIT: u32 = 10;
pub const DEFAULT_AUDIENCE_LIMIT: u32 = 20;

macro_rules! page_params {
    ($($filter:ty),+ $(,)?) => {
        $(impl $filter {
            pub fn page_params(&self) -> PageParams {
                PageParams {
                    page: self.page,
                    limit: self.limit,
                }
            }
        })+
    };
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryFilter {
    pub search: Option<String>,
    pub status: Option<Status>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreFilter {
    pub search: Option<String>,
    pub status: Option<Status>,
    #[serde(alias = "category")]
    pub category_id: Option<String>,
    /// Exact, case-sensitive
    pub city: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionFilter {
    pub search: Option<String>,
    pub status: Option<Status>,
    pub store_id: Option<String>,
    pub category_id: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlyerFilter {
    pub search: Option<String>,
    pub status: Option<Status>,
    pub store_id: Option<String>,
    pub collection_id: Option<String>,
    /// Only flyers inside their activation window right now
    #[serde(default)]
    pub active_only: bool,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserFilter {
    /// Matches name or email
    pub search: Option<String>,
    pub status: Option<AccountStatus>,
    pub language: Option<String>,
    pub city: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationFilter {
    /// Matches title or message
    pub search: Option<String>,
    pub status: Option<NotificationStatus>,
    #[serde(rename = "type")]
    pub notification_type: Option<NotificationType>,
    pub target_type: Option<TargetType>,
    /// `YYYY-MM-DD`, inclusive, on `createdAt`
    pub date_from: Option<String>,
    /// `YYYY-MM-DD`, inclusive, on `createdAt`
    pub date_to: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

page_params!(
    CategoryFilter,
    StoreFilter,
    CollectionFilter,
    FlyerFilter,
    UserFilter,
    NotificationFilter,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_alias() {
        let filter: StoreFilter =
            serde_json::from_str(r#"{"category":"cat-5","city":"Madrid"}"#).unwrap();
        assert_eq!(filter.category_id.as_deref(), Some("cat-5"));

        let filter: StoreFilter = serde_json::from_str(r#"{"categoryId":"cat-2"}"#).unwrap();
        assert_eq!(filter.category_id.as_deref(), Some("cat-2"));
    }

    #[test]
    fn test_notification_filter_names() {
        let filter: NotificationFilter = serde_json::from_str(
            r#"{"type":"NEW_STORE","targetType":"ALL_USERS","status":"SENT","page":2}"#,
        )
        .unwrap();
        assert_eq!(filter.notification_type, Some(NotificationType::NewStore));
        assert_eq!(filter.target_type, Some(TargetType::AllUsers));
        assert_eq!(filter.page_params().resolve(DEFAULT_AUDIENCE_LIMIT), (2, 20));
    }
}
