//! Notification Model

use serde::{Deserialize, Serialize};

/// What produced the notification
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationType {
    /// Authored by an administrator
    #[default]
    AdminMessage,
    NewStore,
    NewCollection,
    DiscountAdded,
}

/// Lifecycle status
///
/// ```text
/// DRAFT ──edit──▶ DRAFT
///   │ edit (future date)
///   ▼
/// SCHEDULED ──send-now──▶ SENT
///   │ cancel
///   ▼
/// CANCELLED
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationStatus {
    Draft,
    Scheduled,
    Sent,
    Cancelled,
}

impl NotificationStatus {
    /// Only drafts and scheduled notifications may be edited or deleted
    pub fn is_editable(&self) -> bool {
        matches!(self, NotificationStatus::Draft | NotificationStatus::Scheduled)
    }
}

/// Who a notification is intended for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    rename_all = "SCREAMING_SNAKE_CASE",
    rename_all_fields = "camelCase"
)]
pub enum NotificationTarget {
    AllUsers,
    CustomUsers { user_ids: Vec<String> },
    StoreFollowers { store_id: String },
}

/// Discriminant of [`NotificationTarget`], used by list filters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TargetType {
    AllUsers,
    CustomUsers,
    StoreFollowers,
}

impl NotificationTarget {
    pub fn target_type(&self) -> TargetType {
        match self {
            NotificationTarget::AllUsers => TargetType::AllUsers,
            NotificationTarget::CustomUsers { .. } => TargetType::CustomUsers,
            NotificationTarget::StoreFollowers { .. } => TargetType::StoreFollowers,
        }
    }
}

/// Notification entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    #[serde(rename = "type")]
    pub notification_type: NotificationType,
    pub title: String,
    pub message: String,
    pub target: NotificationTarget,
    pub status: NotificationStatus,
    pub scheduled_for: Option<i64>,
    pub sent_at: Option<i64>,
    pub store_id: Option<String>,
    pub collection_id: Option<String>,
    pub flyer_id: Option<String>,
    /// Simulated delivery metrics, set once sent
    pub total_target_users: Option<u32>,
    pub delivered_count: Option<u32>,
    pub read_count: Option<u32>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create notification payload (admin-authored)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationCreate {
    #[serde(rename = "type", default)]
    pub notification_type: NotificationType,
    pub title: String,
    pub message: String,
    pub target: NotificationTarget,
    /// Future send time; makes the notification SCHEDULED
    pub scheduled_for: Option<i64>,
    /// Send right away instead of saving a draft
    #[serde(default)]
    pub send_now: bool,
    pub store_id: Option<String>,
    pub collection_id: Option<String>,
    pub flyer_id: Option<String>,
}

/// Update notification payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationUpdate {
    pub title: Option<String>,
    pub message: Option<String>,
    pub target: Option<NotificationTarget>,
    pub scheduled_for: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_wire_format() {
        let target = NotificationTarget::StoreFollowers {
            store_id: "store-1".into(),
        };
        let json = serde_json::to_string(&target).unwrap();
        assert_eq!(json, r#"{"type":"STORE_FOLLOWERS","storeId":"store-1"}"#);

        let parsed: NotificationTarget =
            serde_json::from_str(r#"{"type":"CUSTOM_USERS","userIds":["u1","u2"]}"#).unwrap();
        assert_eq!(parsed.target_type(), TargetType::CustomUsers);

        let all: NotificationTarget = serde_json::from_str(r#"{"type":"ALL_USERS"}"#).unwrap();
        assert_eq!(all, NotificationTarget::AllUsers);
    }

    #[test]
    fn test_status_editability() {
        assert!(NotificationStatus::Draft.is_editable());
        assert!(NotificationStatus::Scheduled.is_editable());
        assert!(!NotificationStatus::Sent.is_editable());
        assert!(!NotificationStatus::Cancelled.is_editable());
    }

    #[test]
    fn test_type_field_is_renamed() {
        let create: NotificationCreate = serde_json::from_str(
            r#"{"title":"t","message":"m","target":{"type":"ALL_USERS"}}"#,
        )
        .unwrap();
        assert_eq!(create.notification_type, NotificationType::AdminMessage);
        assert!(!create.send_now);
    }
}
