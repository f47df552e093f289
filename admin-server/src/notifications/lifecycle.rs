//! Admin-authored notifications
//!
//! ```text
//! create ─┬─ sendNow ───────────────▶ SENT
//!         ├─ future scheduledFor ───▶ SCHEDULED ─┬─ send-now ─▶ SENT
//!         └─ otherwise ─────────────▶ DRAFT      └─ cancel ───▶ CANCELLED
//! DRAFT ── edit with future date ──▶ SCHEDULED
//! ```
//!
//! Only DRAFT and SCHEDULED may be edited or deleted. SENT and CANCELLED are
//! terminal.

use shared::models::{
    Notification, NotificationCreate, NotificationStatus, NotificationTarget, NotificationUpdate,
};
use shared::util::new_id;

use super::engine::{DeliveryMetrics, MANUAL_READ_RATE, NotificationEngine};
use crate::catalog::CatalogStore;
use crate::utils::validation::{MAX_NAME_LEN, MAX_NOTE_LEN, validate_required_text};
use crate::utils::{AppError, AppResult, ErrorCode};

fn validate_target(store: &CatalogStore, target: &NotificationTarget) -> AppResult<()> {
    match target {
        NotificationTarget::CustomUsers { user_ids } if user_ids.is_empty() => {
            Err(AppError::with_message(
                ErrorCode::RequiredField,
                "CUSTOM_USERS target needs at least one user id",
            ))
        }
        NotificationTarget::StoreFollowers { store_id } if store.get_store(store_id).is_err() => {
            Err(AppError::with_message(
                ErrorCode::ValidationFailed,
                format!("target.storeId references an unknown record: {store_id}"),
            )
            .with_detail("storeId", store_id.as_str()))
        }
        _ => Ok(()),
    }
}

fn validate_schedule(scheduled_for: i64, now: i64) -> AppResult<()> {
    if scheduled_for <= now {
        return Err(AppError::new(ErrorCode::NotificationScheduleInPast)
            .with_detail("scheduledFor", scheduled_for));
    }
    Ok(())
}

fn ensure_editable(notification: &Notification) -> AppResult<()> {
    if !notification.status.is_editable() {
        return Err(AppError::new(ErrorCode::NotificationNotEditable)
            .with_detail("status", serde_json::to_value(notification.status).unwrap_or_default()));
    }
    Ok(())
}

fn ensure_scheduled(notification: &Notification, action: &str) -> AppResult<()> {
    if notification.status != NotificationStatus::Scheduled {
        return Err(AppError::conflict(
            ErrorCode::NotificationNotScheduled,
            format!("Can only {action} scheduled notifications"),
        ));
    }
    Ok(())
}

impl NotificationEngine {
    pub fn create_manual(
        &self,
        store: &mut CatalogStore,
        data: NotificationCreate,
    ) -> AppResult<Notification> {
        validate_required_text(&data.title, "title", MAX_NAME_LEN)?;
        validate_required_text(&data.message, "message", MAX_NOTE_LEN)?;
        validate_target(store, &data.target)?;
        let now = store.now();
        if data.send_now && data.scheduled_for.is_some() {
            return Err(AppError::validation(
                "Choose either sendNow or scheduledFor, not both",
            ));
        }
        if let Some(at) = data.scheduled_for {
            validate_schedule(at, now)?;
        }

        let mut notification = Notification {
            id: new_id("notif"),
            notification_type: data.notification_type,
            title: data.title.trim().to_string(),
            message: data.message,
            target: data.target,
            status: NotificationStatus::Draft,
            scheduled_for: data.scheduled_for,
            sent_at: None,
            store_id: data.store_id,
            collection_id: data.collection_id,
            flyer_id: data.flyer_id,
            total_target_users: None,
            delivered_count: None,
            read_count: None,
            created_at: now,
            updated_at: now,
        };

        if data.send_now {
            self.deliver(store, &mut notification, now)?;
        } else if notification.scheduled_for.is_some() {
            notification.status = NotificationStatus::Scheduled;
        }

        tracing::info!(
            notification_id = %notification.id,
            status = ?notification.status,
            "Notification created"
        );
        Ok(store.save_notification(notification))
    }

    pub fn update_manual(
        &self,
        store: &mut CatalogStore,
        id: &str,
        data: NotificationUpdate,
    ) -> AppResult<Notification> {
        let mut notification = store.get_notification(id)?.clone();
        ensure_editable(&notification)?;
        let now = store.now();

        if let Some(title) = data.title {
            validate_required_text(&title, "title", MAX_NAME_LEN)?;
            notification.title = title.trim().to_string();
        }
        if let Some(message) = data.message {
            validate_required_text(&message, "message", MAX_NOTE_LEN)?;
            notification.message = message;
        }
        if let Some(target) = data.target {
            validate_target(store, &target)?;
            notification.target = target;
        }
        if let Some(at) = data.scheduled_for {
            validate_schedule(at, now)?;
            notification.scheduled_for = Some(at);
            notification.status = NotificationStatus::Scheduled;
        }
        notification.updated_at = now;

        tracing::info!(notification_id = %id, status = ?notification.status, "Notification updated");
        Ok(store.save_notification(notification))
    }

    pub fn delete_manual(&self, store: &mut CatalogStore, id: &str) -> AppResult<Notification> {
        ensure_editable(store.get_notification(id)?)?;
        let removed = store.remove_notification(id)?;
        tracing::info!(notification_id = %id, "Notification deleted");
        Ok(removed)
    }

    /// SCHEDULED → CANCELLED
    pub fn cancel(&self, store: &mut CatalogStore, id: &str) -> AppResult<Notification> {
        let mut notification = store.get_notification(id)?.clone();
        ensure_scheduled(&notification, "cancel")?;

        notification.status = NotificationStatus::Cancelled;
        notification.updated_at = store.now();

        tracing::info!(notification_id = %id, "Notification cancelled");
        Ok(store.save_notification(notification))
    }

    /// SCHEDULED → SENT, metrics computed now
    pub fn send_now(&self, store: &mut CatalogStore, id: &str) -> AppResult<Notification> {
        let mut notification = store.get_notification(id)?.clone();
        ensure_scheduled(&notification, "send")?;

        let now = store.now();
        self.deliver(store, &mut notification, now)?;

        tracing::info!(
            notification_id = %id,
            total_target_users = notification.total_target_users.unwrap_or_default(),
            "Notification sent"
        );
        Ok(store.save_notification(notification))
    }

    fn deliver(
        &self,
        store: &CatalogStore,
        notification: &mut Notification,
        now: i64,
    ) -> AppResult<()> {
        let total = self.resolver.resolve(store, &notification.target)?;
        DeliveryMetrics::simulate(total, MANUAL_READ_RATE).apply_to(notification);
        notification.status = NotificationStatus::Sent;
        notification.sent_at = Some(now);
        notification.updated_at = now;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::clock::{Clock, ManualClock};
    use crate::notifications::audience::{AudienceResolver, FixedFollowerEstimate};
    use shared::error::ErrorKind;
    use shared::models::{AppUserCreate, CategoryCreate, NotificationType, StoreCreate};
    use std::sync::Arc;

    const HOUR: i64 = 3_600_000;

    fn setup() -> (NotificationEngine, CatalogStore, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new(1_000 * HOUR));
        let mut store = CatalogStore::new(clock.clone());
        for i in 0..10 {
            store
                .create_user(AppUserCreate {
                    email: format!("u{i}@example.com"),
                    name: format!("User {i}"),
                    ..Default::default()
                })
                .unwrap();
        }
        let engine =
            NotificationEngine::new(AudienceResolver::new(Arc::new(FixedFollowerEstimate(3))));
        (engine, store, clock)
    }

    fn payload() -> NotificationCreate {
        NotificationCreate {
            notification_type: NotificationType::AdminMessage,
            title: "Summer sale".into(),
            message: "Up to 50% off this weekend".into(),
            target: NotificationTarget::AllUsers,
            scheduled_for: None,
            send_now: false,
            store_id: None,
            collection_id: None,
            flyer_id: None,
        }
    }

    #[test]
    fn test_initial_status() {
        let (engine, mut store, clock) = setup();

        let draft = engine.create_manual(&mut store, payload()).unwrap();
        assert_eq!(draft.status, NotificationStatus::Draft);
        assert_eq!(draft.total_target_users, None);

        let scheduled = engine
            .create_manual(
                &mut store,
                NotificationCreate {
                    scheduled_for: Some(clock.now_millis() + HOUR),
                    ..payload()
                },
            )
            .unwrap();
        assert_eq!(scheduled.status, NotificationStatus::Scheduled);

        let sent = engine
            .create_manual(
                &mut store,
                NotificationCreate {
                    send_now: true,
                    ..payload()
                },
            )
            .unwrap();
        assert_eq!(sent.status, NotificationStatus::Sent);
        assert_eq!(sent.total_target_users, Some(10));
        assert_eq!(sent.read_count, Some(7));
    }

    #[test]
    fn test_schedule_must_be_in_future() {
        let (engine, mut store, clock) = setup();
        let err = engine
            .create_manual(
                &mut store,
                NotificationCreate {
                    scheduled_for: Some(clock.now_millis()),
                    ..payload()
                },
            )
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::NotificationScheduleInPast);
    }

    #[test]
    fn test_empty_custom_target_rejected() {
        let (engine, mut store, _) = setup();
        let err = engine
            .create_manual(
                &mut store,
                NotificationCreate {
                    target: NotificationTarget::CustomUsers { user_ids: vec![] },
                    ..payload()
                },
            )
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);
    }

    #[test]
    fn test_edit_with_future_date_schedules_draft() {
        let (engine, mut store, clock) = setup();
        let draft = engine.create_manual(&mut store, payload()).unwrap();

        let edited = engine
            .update_manual(
                &mut store,
                &draft.id,
                NotificationUpdate {
                    title: Some("Flash sale".into()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(edited.status, NotificationStatus::Draft);
        assert_eq!(edited.title, "Flash sale");

        let scheduled = engine
            .update_manual(
                &mut store,
                &draft.id,
                NotificationUpdate {
                    scheduled_for: Some(clock.now_millis() + HOUR),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(scheduled.status, NotificationStatus::Scheduled);
    }

    #[test]
    fn test_cancel_twice_fails_second_time() {
        let (engine, mut store, clock) = setup();
        let n = engine
            .create_manual(
                &mut store,
                NotificationCreate {
                    scheduled_for: Some(clock.now_millis() + HOUR),
                    ..payload()
                },
            )
            .unwrap();

        let cancelled = engine.cancel(&mut store, &n.id).unwrap();
        assert_eq!(cancelled.status, NotificationStatus::Cancelled);

        let err = engine.cancel(&mut store, &n.id).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotificationNotScheduled);
        assert_eq!(err.message, "Can only cancel scheduled notifications");
        assert_eq!(
            store.get_notification(&n.id).unwrap().status,
            NotificationStatus::Cancelled
        );
    }

    #[test]
    fn test_send_now_only_from_scheduled() {
        let (engine, mut store, clock) = setup();
        let draft = engine.create_manual(&mut store, payload()).unwrap();
        assert_eq!(
            engine.send_now(&mut store, &draft.id).unwrap_err().code,
            ErrorCode::NotificationNotScheduled
        );

        let n = engine
            .create_manual(
                &mut store,
                NotificationCreate {
                    scheduled_for: Some(clock.now_millis() + 2 * HOUR),
                    target: NotificationTarget::CustomUsers {
                        user_ids: vec!["a".into(), "b".into(), "c".into()],
                    },
                    ..payload()
                },
            )
            .unwrap();
        clock.advance(HOUR);
        let sent = engine.send_now(&mut store, &n.id).unwrap();
        assert_eq!(sent.status, NotificationStatus::Sent);
        assert_eq!(sent.sent_at, Some(clock.now_millis()));
        assert_eq!(sent.total_target_users, Some(3));
        assert_eq!(sent.delivered_count, Some(3));
        assert_eq!(sent.read_count, Some(2));
    }

    #[test]
    fn test_terminal_states_reject_edit_and_delete() {
        let (engine, mut store, _) = setup();
        let sent = engine
            .create_manual(
                &mut store,
                NotificationCreate {
                    send_now: true,
                    ..payload()
                },
            )
            .unwrap();

        let err = engine
            .update_manual(&mut store, &sent.id, NotificationUpdate::default())
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::NotificationNotEditable);
        assert_eq!(
            engine.delete_manual(&mut store, &sent.id).unwrap_err().code,
            ErrorCode::NotificationNotEditable
        );

        let draft = engine.create_manual(&mut store, payload()).unwrap();
        engine.delete_manual(&mut store, &draft.id).unwrap();
        assert_eq!(
            store.get_notification(&draft.id).unwrap_err().code,
            ErrorCode::NotificationNotFound
        );
    }

    fn followers_of(store_id: &str) -> NotificationTarget {
        NotificationTarget::StoreFollowers {
            store_id: store_id.into(),
        }
    }

    #[test]
    fn test_unknown_follower_store_rejected() {
        let (engine, mut store, clock) = setup();
        let err = engine
            .create_manual(
                &mut store,
                NotificationCreate {
                    target: followers_of("store-nope"),
                    scheduled_for: Some(clock.now_millis() + HOUR),
                    ..payload()
                },
            )
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(store.list_notifications().is_empty());

        let draft = engine.create_manual(&mut store, payload()).unwrap();
        let err = engine
            .update_manual(
                &mut store,
                &draft.id,
                NotificationUpdate {
                    target: Some(followers_of("store-nope")),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(
            store.get_notification(&draft.id).unwrap().target,
            NotificationTarget::AllUsers
        );
    }

    #[test]
    fn test_follower_store_deleted_after_scheduling() {
        let (engine, mut store, clock) = setup();
        let category = store
            .create_category(CategoryCreate {
                name: "Furniture".into(),
                ..Default::default()
            })
            .unwrap();
        let shop = store
            .create_store(StoreCreate {
                name: "IKEA".into(),
                category_id: category.id,
                ..Default::default()
            })
            .unwrap()
            .record;

        let n = engine
            .create_manual(
                &mut store,
                NotificationCreate {
                    target: followers_of(&shop.id),
                    scheduled_for: Some(clock.now_millis() + HOUR),
                    ..payload()
                },
            )
            .unwrap();
        assert_eq!(n.status, NotificationStatus::Scheduled);

        store.delete_store(&shop.id).unwrap();
        let err = engine.send_now(&mut store, &n.id).unwrap_err();
        assert_eq!(err.code, ErrorCode::AudienceUnresolved);
        assert_eq!(err.kind(), ErrorKind::Conflict);
        assert_eq!(err.http_status(), http::StatusCode::BAD_REQUEST);
        assert_eq!(
            store.get_notification(&n.id).unwrap().status,
            NotificationStatus::Scheduled
        );
    }
}
