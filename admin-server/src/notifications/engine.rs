//! NotificationEngine - automatic notifications
//!
//! Turns committed [`CatalogEvent`]s into SENT notifications. Runs after the
//! primary mutation and never fails it: a notification that cannot be
//! synthesized is logged and dropped.
//!
//! | Event               | Type              | Target            |
//! |---------------------|-------------------|-------------------|
//! | `StoreCreated`      | `NEW_STORE`       | all users         |
//! | `CollectionCreated` | `NEW_COLLECTION`  | store followers   |
//! | `DiscountIncreased` | `DISCOUNT_ADDED`  | store followers   |

use shared::models::{Notification, NotificationStatus, NotificationTarget, NotificationType};
use shared::util::new_id;

use super::audience::AudienceResolver;
use crate::catalog::pricing::display_price;
use crate::catalog::{CatalogEvent, CatalogStore};
use crate::utils::AppResult;

/// Simulated read rate of auto-notifications, percent
pub const AUTO_READ_RATE: u32 = 60;
/// Simulated read rate of admin-sent notifications, percent
pub const MANUAL_READ_RATE: u32 = 70;

/// Simulated delivery metrics for a sent notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeliveryMetrics {
    pub total_target_users: u32,
    pub delivered_count: u32,
    pub read_count: u32,
}

impl DeliveryMetrics {
    /// Everyone receives it; `floor(total × rate / 100)` read it
    pub fn simulate(total_target_users: u32, read_rate: u32) -> Self {
        let read = u64::from(total_target_users) * u64::from(read_rate) / 100;
        Self {
            total_target_users,
            delivered_count: total_target_users,
            read_count: read as u32,
        }
    }

    pub fn apply_to(&self, notification: &mut Notification) {
        notification.total_target_users = Some(self.total_target_users);
        notification.delivered_count = Some(self.delivered_count);
        notification.read_count = Some(self.read_count);
    }
}

/// What an event asks to be announced
struct Announcement {
    notification_type: NotificationType,
    title: String,
    message: String,
    target: NotificationTarget,
    store_id: Option<String>,
    collection_id: Option<String>,
    flyer_id: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct NotificationEngine {
    pub(super) resolver: AudienceResolver,
}

impl NotificationEngine {
    pub fn new(resolver: AudienceResolver) -> Self {
        Self { resolver }
    }

    /// Synthesize one notification per event, best-effort
    ///
    /// Returns the notifications that were stored. Failures are logged at
    /// `warn` and skipped.
    pub fn dispatch(&self, store: &mut CatalogStore, events: &[CatalogEvent]) -> Vec<Notification> {
        let mut sent = Vec::with_capacity(events.len());
        for event in events {
            match self.synthesize(store, event) {
                Ok(notification) => {
                    tracing::info!(
                        notification_id = %notification.id,
                        event = event.name(),
                        total_target_users = notification.total_target_users.unwrap_or_default(),
                        "Auto-notification sent"
                    );
                    sent.push(notification);
                }
                Err(e) => {
                    tracing::warn!(
                        event = event.name(),
                        code = %e.code,
                        error = %e,
                        "Auto-notification skipped"
                    );
                }
            }
        }
        sent
    }

    fn synthesize(&self, store: &mut CatalogStore, event: &CatalogEvent) -> AppResult<Notification> {
        let announcement = announce(store, event)?;
        let total = self.resolver.resolve(store, &announcement.target)?;
        let now = store.now();

        let mut notification = Notification {
            id: new_id("notif"),
            notification_type: announcement.notification_type,
            title: announcement.title,
            message: announcement.message,
            target: announcement.target,
            status: NotificationStatus::Sent,
            scheduled_for: None,
            sent_at: Some(now),
            store_id: announcement.store_id,
            collection_id: announcement.collection_id,
            flyer_id: announcement.flyer_id,
            total_target_users: None,
            delivered_count: None,
            read_count: None,
            created_at: now,
            updated_at: now,
        };
        DeliveryMetrics::simulate(total, AUTO_READ_RATE).apply_to(&mut notification);

        Ok(store.save_notification(notification))
    }
}

fn announce(store: &CatalogStore, event: &CatalogEvent) -> AppResult<Announcement> {
    match event {
        CatalogEvent::StoreCreated { store_id } => {
            let shop = store.get_store(store_id)?;
            let message = if shop.location.city.is_empty() {
                format!("{} just joined. Check out their latest deals!", shop.name)
            } else {
                format!(
                    "{} just opened in {}. Check out their latest deals!",
                    shop.name, shop.location.city
                )
            };
            Ok(Announcement {
                notification_type: NotificationType::NewStore,
                title: format!("New store: {}", shop.name),
                message,
                target: NotificationTarget::AllUsers,
                store_id: Some(store_id.clone()),
                collection_id: None,
                flyer_id: None,
            })
        }
        CatalogEvent::CollectionCreated {
            collection_id,
            store_id,
        } => {
            let shop = store.get_store(store_id)?;
            let collection = store.get_collection(collection_id)?;
            Ok(Announcement {
                notification_type: NotificationType::NewCollection,
                title: format!("New collection at {}", shop.name),
                message: format!("\"{}\" is now available at {}.", collection.name, shop.name),
                target: NotificationTarget::StoreFollowers {
                    store_id: store_id.clone(),
                },
                store_id: Some(store_id.clone()),
                collection_id: Some(collection_id.clone()),
                flyer_id: None,
            })
        }
        CatalogEvent::DiscountIncreased {
            flyer_id,
            collection_id,
            store_id,
            current,
            ..
        } => {
            let shop = store.get_store(store_id)?;
            let flyer = store.get_flyer(flyer_id)?;
            Ok(Announcement {
                notification_type: NotificationType::DiscountAdded,
                title: format!("{current}% off at {}", shop.name),
                message: format!(
                    "{} is now {current}% off: {} instead of {}.",
                    flyer.name,
                    display_price(flyer.final_price),
                    display_price(flyer.price)
                ),
                target: NotificationTarget::StoreFollowers {
                    store_id: store_id.clone(),
                },
                store_id: Some(store_id.clone()),
                collection_id: Some(collection_id.clone()),
                flyer_id: Some(flyer_id.clone()),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::clock::ManualClock;
    use crate::notifications::audience::FixedFollowerEstimate;
    use shared::models::{AppUserCreate, CategoryCreate, CollectionCreate, FlyerCreate, Location, StoreCreate};
    use std::sync::Arc;

    fn engine(followers: u32) -> NotificationEngine {
        NotificationEngine::new(AudienceResolver::new(Arc::new(FixedFollowerEstimate(
            followers,
        ))))
    }

    fn seeded() -> CatalogStore {
        let mut store = CatalogStore::new(Arc::new(ManualClock::new(1_000)));
        for i in 0..5 {
            store
                .create_user(AppUserCreate {
                    email: format!("u{i}@example.com"),
                    name: format!("User {i}"),
                    ..Default::default()
                })
                .unwrap();
        }
        store
            .create_category(CategoryCreate {
                name: "Furniture".into(),
                ..Default::default()
            })
            .unwrap();
        store
    }

    #[test]
    fn test_metrics_floor() {
        assert_eq!(
            DeliveryMetrics::simulate(5, AUTO_READ_RATE),
            DeliveryMetrics {
                total_target_users: 5,
                delivered_count: 5,
                read_count: 3,
            }
        );
        assert_eq!(DeliveryMetrics::simulate(9, MANUAL_READ_RATE).read_count, 6);
        assert_eq!(DeliveryMetrics::simulate(0, AUTO_READ_RATE).read_count, 0);
    }

    #[test]
    fn test_store_created_notifies_all_users() {
        let mut store = seeded();
        let category_id = store.list_categories()[0].id.clone();
        let committed = store
            .create_store(StoreCreate {
                name: "IKEA".into(),
                category_id,
                location: Location::in_city("Madrid"),
                ..Default::default()
            })
            .unwrap();

        let sent = engine(2).dispatch(&mut store, &committed.events);
        assert_eq!(sent.len(), 1);
        let n = &sent[0];
        assert_eq!(n.notification_type, NotificationType::NewStore);
        assert_eq!(n.target, NotificationTarget::AllUsers);
        assert_eq!(n.status, NotificationStatus::Sent);
        assert_eq!(n.sent_at, Some(1_000));
        assert_eq!(n.total_target_users, Some(5));
        assert_eq!(n.delivered_count, Some(5));
        assert_eq!(n.read_count, Some(3));
        assert_eq!(n.store_id.as_deref(), Some(committed.record.id.as_str()));
        assert!(n.message.contains("Madrid"));
        assert!(store.get_notification(&n.id).is_ok());
    }

    #[test]
    fn test_discount_message_uses_display_prices() {
        let mut store = seeded();
        let category_id = store.list_categories()[0].id.clone();
        let shop = store
            .create_store(StoreCreate {
                name: "IKEA".into(),
                category_id,
                ..Default::default()
            })
            .unwrap()
            .record;
        let collection = store
            .create_collection(CollectionCreate {
                name: "Fall Catalog".into(),
                store_id: shop.id.clone(),
                ..Default::default()
            })
            .unwrap()
            .record;
        let committed = store
            .create_flyer(FlyerCreate {
                name: "Lamp".into(),
                price: 15.99,
                discount_percentage: 25.0,
                collection_id: collection.id,
                start_date: 0,
                end_date: 10_000,
                ..Default::default()
            })
            .unwrap();

        let sent = engine(4).dispatch(&mut store, &committed.events);
        let n = &sent[0];
        assert_eq!(n.notification_type, NotificationType::DiscountAdded);
        assert_eq!(n.title, "25% off at IKEA");
        assert_eq!(n.message, "Lamp is now 25% off: 11.99 instead of 15.99.");
        assert_eq!(n.total_target_users, Some(4));
        assert_eq!(n.read_count, Some(2));
        assert_eq!(
            n.target,
            NotificationTarget::StoreFollowers { store_id: shop.id }
        );
    }

    #[test]
    fn test_failures_are_swallowed() {
        let mut store = seeded();
        let events = vec![
            CatalogEvent::StoreCreated {
                store_id: "store-gone".into(),
            },
            CatalogEvent::CollectionCreated {
                collection_id: "col-gone".into(),
                store_id: "store-gone".into(),
            },
        ];
        let sent = engine(1).dispatch(&mut store, &events);
        assert!(sent.is_empty());
        assert_eq!(store.list_notifications().len(), 0);
    }
}
