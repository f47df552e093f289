//! CatalogService - the shared handle handlers talk to
//!
//! Wraps the single [`CatalogStore`] in `Arc<RwLock<_>>`. Every mutation runs
//! under one write guard together with its cascades and the notification
//! hook, so mutations are serialized globally. Reads take the read guard and
//! enrich against one consistent snapshot.

use std::sync::Arc;

use parking_lot::RwLock;
use serde::Serialize;
use shared::models::{
    AccountStatus, AppUserCreate, AppUserUpdate, Category, CategoryCreate, CategoryUpdate,
    CollectionCreate, CollectionUpdate, Flyer, FlyerCreate, FlyerUpdate, Notification,
    NotificationCreate, NotificationStatus, NotificationUpdate, Store, StoreCreate, StoreUpdate,
};
use shared::query::Page;

use super::activation;
use super::events::CatalogEvent;
use super::filters::{
    CategoryFilter, CollectionFilter, DEFAULT_AUDIENCE_LIMIT, DEFAULT_CATALOG_LIMIT, FlyerFilter,
    NotificationFilter, StoreFilter, UserFilter,
};
use super::integrity::{self, IntegrityReport};
use super::query::Query;
use super::store::CatalogStore;
use super::views::{AppUserView, CategoryView, CollectionView, FlyerView, StoreView};
use crate::notifications::NotificationEngine;
use crate::utils::AppResult;
use crate::utils::time::date_range;

/// A settled record plus the auto-notifications its mutation triggered
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationOutcome<T> {
    #[serde(flatten)]
    pub record: T,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub triggered_notifications: Vec<Notification>,
}

/// Result of deleting a collection
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionRemoval {
    pub id: String,
    pub name: String,
    pub flyers_removed: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStatusCounts {
    pub active: usize,
    pub suspended: usize,
    pub pending: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationStatusCounts {
    pub draft: usize,
    pub scheduled: usize,
    pub sent: usize,
    pub cancelled: usize,
}

/// Dashboard landing page totals
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub categories: usize,
    pub stores: usize,
    pub collections: usize,
    pub flyers: usize,
    pub active_flyers: usize,
    pub users: usize,
    pub users_by_status: UserStatusCounts,
    pub notifications: usize,
    pub notifications_by_status: NotificationStatusCounts,
}

#[derive(Clone)]
pub struct CatalogService {
    store: Arc<RwLock<CatalogStore>>,
    notifications: Arc<NotificationEngine>,
    auto_notifications: bool,
}

impl std::fmt::Debug for CatalogService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let store = self.store.read();
        f.debug_struct("CatalogService")
            .field("categories", &store.categories.len())
            .field("stores", &store.stores.len())
            .field("collections", &store.collections.len())
            .field("flyers", &store.flyers.len())
            .field("users", &store.users.len())
            .field("notifications", &store.notifications.len())
            .field("auto_notifications", &self.auto_notifications)
            .finish()
    }
}

impl CatalogService {
    pub fn new(store: CatalogStore, notifications: NotificationEngine) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            notifications: Arc::new(notifications),
            auto_notifications: true,
        }
    }

    /// Turn the auto-notification hook on or off
    pub fn with_auto_notifications(mut self, enabled: bool) -> Self {
        self.auto_notifications = enabled;
        self
    }

    /// Run the post-commit hook; caller holds the write guard
    fn after_commit(&self, store: &mut CatalogStore, events: &[CatalogEvent]) -> Vec<Notification> {
        if !self.auto_notifications || events.is_empty() {
            return Vec::new();
        }
        self.notifications.dispatch(store, events)
    }

    // =========================================================================
    // Categories
    // =========================================================================

    pub fn list_categories(&self, filter: &CategoryFilter) -> Page<CategoryView> {
        let store = self.store.read();
        Query::new(store.categories())
            .search(filter.search.as_deref(), |c| vec![c.name.as_str()])
            .filter_eq(filter.status.as_ref(), |c| &c.status)
            .newest_first(|c| c.created_at)
            .paginate(filter.page_params(), DEFAULT_CATALOG_LIMIT)
            .map(|c| store.category_view(c))
    }

    pub fn get_category(&self, id: &str) -> AppResult<CategoryView> {
        let store = self.store.read();
        Ok(store.category_view(store.get_category(id)?))
    }

    pub fn create_category(&self, data: CategoryCreate) -> AppResult<CategoryView> {
        let mut store = self.store.write();
        let category = store.create_category(data)?;
        Ok(store.category_view(&category))
    }

    pub fn update_category(&self, id: &str, data: CategoryUpdate) -> AppResult<CategoryView> {
        let mut store = self.store.write();
        let category = store.update_category(id, data)?;
        Ok(store.category_view(&category))
    }

    pub fn delete_category(&self, id: &str) -> AppResult<Category> {
        self.store.write().delete_category(id)
    }

    // =========================================================================
    // Stores
    // =========================================================================

    pub fn list_stores(&self, filter: &StoreFilter) -> Page<StoreView> {
        let store = self.store.read();
        Query::new(store.stores())
            .search(filter.search.as_deref(), |s| vec![s.name.as_str()])
            .filter_eq(filter.status.as_ref(), |s| &s.status)
            .filter_eq(filter.category_id.as_deref(), |s| s.category_id.as_str())
            .filter_eq(filter.city.as_deref(), |s| s.location.city.as_str())
            .newest_first(|s| s.created_at)
            .paginate(filter.page_params(), DEFAULT_CATALOG_LIMIT)
            .map(|s| store.store_view(s))
    }

    pub fn get_store(&self, id: &str) -> AppResult<StoreView> {
        let store = self.store.read();
        Ok(store.store_view(store.get_store(id)?))
    }

    pub fn create_store(&self, data: StoreCreate) -> AppResult<MutationOutcome<StoreView>> {
        let mut store = self.store.write();
        let committed = store.create_store(data)?;
        let triggered_notifications = self.after_commit(&mut store, &committed.events);
        Ok(MutationOutcome {
            record: store.store_view(&committed.record),
            triggered_notifications,
        })
    }

    pub fn update_store(&self, id: &str, data: StoreUpdate) -> AppResult<MutationOutcome<StoreView>> {
        let mut store = self.store.write();
        let updated = store.update_store(id, data)?;
        Ok(MutationOutcome {
            record: store.store_view(&updated),
            triggered_notifications: Vec::new(),
        })
    }

    pub fn delete_store(&self, id: &str) -> AppResult<Store> {
        self.store.write().delete_store(id)
    }

    // =========================================================================
    // Collections
    // =========================================================================

    pub fn list_collections(&self, filter: &CollectionFilter) -> Page<CollectionView> {
        let store = self.store.read();
        Query::new(store.collections())
            .search(filter.search.as_deref(), |c| vec![c.name.as_str()])
            .filter_eq(filter.status.as_ref(), |c| &c.status)
            .filter_eq(filter.store_id.as_deref(), |c| c.store_id.as_str())
            .filter(filter.category_id.is_some(), |c| {
                c.category_id.as_deref() == filter.category_id.as_deref()
            })
            .newest_first(|c| c.created_at)
            .paginate(filter.page_params(), DEFAULT_CATALOG_LIMIT)
            .map(|c| store.collection_view(c))
    }

    pub fn get_collection(&self, id: &str) -> AppResult<CollectionView> {
        let store = self.store.read();
        Ok(store.collection_view(store.get_collection(id)?))
    }

    pub fn create_collection(
        &self,
        data: CollectionCreate,
    ) -> AppResult<MutationOutcome<CollectionView>> {
        let mut store = self.store.write();
        let committed = store.create_collection(data)?;
        let triggered_notifications = self.after_commit(&mut store, &committed.events);
        Ok(MutationOutcome {
            record: store.collection_view(&committed.record),
            triggered_notifications,
        })
    }

    pub fn update_collection(
        &self,
        id: &str,
        data: CollectionUpdate,
    ) -> AppResult<MutationOutcome<CollectionView>> {
        let mut store = self.store.write();
        let updated = store.update_collection(id, data)?;
        Ok(MutationOutcome {
            record: store.collection_view(&updated),
            triggered_notifications: Vec::new(),
        })
    }

    pub fn delete_collection(&self, id: &str) -> AppResult<CollectionRemoval> {
        let (collection, flyers_removed) = self.store.write().delete_collection(id)?;
        Ok(CollectionRemoval {
            id: collection.id,
            name: collection.name,
            flyers_removed,
        })
    }

    // =========================================================================
    // Flyers
    // =========================================================================

    pub fn list_flyers(&self, filter: &FlyerFilter) -> Page<FlyerView> {
        let store = self.store.read();
        let now = store.now();
        Query::new(store.flyers())
            .search(filter.search.as_deref(), |f| vec![f.name.as_str()])
            .filter_eq(filter.status.as_ref(), |f| &f.status)
            .filter_eq(filter.store_id.as_deref(), |f| f.store_id.as_str())
            .filter_eq(filter.collection_id.as_deref(), |f| f.collection_id.as_str())
            .filter(filter.active_only, |f| activation::is_active(f, now))
            .newest_first(|f| f.created_at)
            .paginate(filter.page_params(), DEFAULT_CATALOG_LIMIT)
            .map(|f| store.flyer_view(f))
    }

    pub fn get_flyer(&self, id: &str) -> AppResult<FlyerView> {
        let store = self.store.read();
        Ok(store.flyer_view(store.get_flyer(id)?))
    }

    pub fn create_flyer(&self, data: FlyerCreate) -> AppResult<MutationOutcome<FlyerView>> {
        let mut store = self.store.write();
        let committed = store.create_flyer(data)?;
        let triggered_notifications = self.after_commit(&mut store, &committed.events);
        Ok(MutationOutcome {
            record: store.flyer_view(&committed.record),
            triggered_notifications,
        })
    }

    pub fn update_flyer(&self, id: &str, data: FlyerUpdate) -> AppResult<MutationOutcome<FlyerView>> {
        let mut store = self.store.write();
        let committed = store.update_flyer(id, data)?;
        let triggered_notifications = self.after_commit(&mut store, &committed.events);
        Ok(MutationOutcome {
            record: store.flyer_view(&committed.record),
            triggered_notifications,
        })
    }

    pub fn delete_flyer(&self, id: &str) -> AppResult<Flyer> {
        self.store.write().delete_flyer(id)
    }

    // =========================================================================
    // App users
    // =========================================================================

    pub fn list_users(&self, filter: &UserFilter) -> Page<AppUserView> {
        let store = self.store.read();
        Query::new(store.users())
            .search(filter.search.as_deref(), |u| {
                vec![u.name.as_str(), u.email.as_str()]
            })
            .filter_eq(filter.status.as_ref(), |u| &u.status)
            .filter_eq(filter.language.as_deref(), |u| u.language.as_str())
            .filter_eq(filter.city.as_deref(), |u| u.location.city.as_str())
            .newest_first(|u| u.created_at)
            .paginate(filter.page_params(), DEFAULT_AUDIENCE_LIMIT)
            .map(|u| store.user_view(u))
    }

    pub fn get_user(&self, id: &str) -> AppResult<AppUserView> {
        let store = self.store.read();
        Ok(store.user_view(store.get_user(id)?))
    }

    pub fn create_user(&self, data: AppUserCreate) -> AppResult<AppUserView> {
        let mut store = self.store.write();
        let user = store.create_user(data)?;
        Ok(store.user_view(&user))
    }

    pub fn update_user(&self, id: &str, data: AppUserUpdate) -> AppResult<AppUserView> {
        let mut store = self.store.write();
        let user = store.update_user(id, data)?;
        Ok(store.user_view(&user))
    }

    pub fn delete_user(&self, id: &str) -> AppResult<AppUserView> {
        let mut store = self.store.write();
        let user = store.delete_user(id)?;
        Ok(store.user_view(&user))
    }

    // =========================================================================
    // Notifications
    // =========================================================================

    pub fn list_notifications(&self, filter: &NotificationFilter) -> AppResult<Page<Notification>> {
        let (from, to) = date_range(filter.date_from.as_deref(), filter.date_to.as_deref())?;
        let store = self.store.read();
        let page = Query::new(store.notifications())
            .search(filter.search.as_deref(), |n| {
                vec![n.title.as_str(), n.message.as_str()]
            })
            .filter_eq(filter.status.as_ref(), |n| &n.status)
            .filter_eq(filter.notification_type.as_ref(), |n| &n.notification_type)
            .filter(filter.target_type.is_some(), |n| {
                Some(n.target.target_type()) == filter.target_type
            })
            .filter(from.is_some() || to.is_some(), |n| {
                from.is_none_or(|start| n.created_at >= start)
                    && to.is_none_or(|end| n.created_at < end)
            })
            .newest_first(|n| n.created_at)
            .paginate(filter.page_params(), DEFAULT_AUDIENCE_LIMIT)
            .map(Notification::clone);
        Ok(page)
    }

    pub fn get_notification(&self, id: &str) -> AppResult<Notification> {
        self.store.read().get_notification(id).cloned()
    }

    pub fn create_notification(&self, data: NotificationCreate) -> AppResult<Notification> {
        let mut store = self.store.write();
        self.notifications.create_manual(&mut store, data)
    }

    pub fn update_notification(&self, id: &str, data: NotificationUpdate) -> AppResult<Notification> {
        let mut store = self.store.write();
        self.notifications.update_manual(&mut store, id, data)
    }

    pub fn delete_notification(&self, id: &str) -> AppResult<Notification> {
        let mut store = self.store.write();
        self.notifications.delete_manual(&mut store, id)
    }

    pub fn cancel_notification(&self, id: &str) -> AppResult<Notification> {
        let mut store = self.store.write();
        self.notifications.cancel(&mut store, id)
    }

    pub fn send_notification_now(&self, id: &str) -> AppResult<Notification> {
        let mut store = self.store.write();
        self.notifications.send_now(&mut store, id)
    }

    // =========================================================================
    // Dashboard and maintenance
    // =========================================================================

    pub fn dashboard_stats(&self) -> DashboardStats {
        let store = self.store.read();
        let now = store.now();

        let mut users_by_status = UserStatusCounts::default();
        for user in store.users() {
            match user.status {
                AccountStatus::Active => users_by_status.active += 1,
                AccountStatus::Suspended => users_by_status.suspended += 1,
                AccountStatus::Pending => users_by_status.pending += 1,
            }
        }

        let mut notifications_by_status = NotificationStatusCounts::default();
        for notification in store.notifications() {
            match notification.status {
                NotificationStatus::Draft => notifications_by_status.draft += 1,
                NotificationStatus::Scheduled => notifications_by_status.scheduled += 1,
                NotificationStatus::Sent => notifications_by_status.sent += 1,
                NotificationStatus::Cancelled => notifications_by_status.cancelled += 1,
            }
        }

        DashboardStats {
            categories: store.categories.len(),
            stores: store.stores.len(),
            collections: store.collections.len(),
            flyers: store.flyers.len(),
            active_flyers: store
                .flyers()
                .filter(|f| activation::is_active(f, now))
                .count(),
            users: store.users.len(),
            users_by_status,
            notifications: store.notifications.len(),
            notifications_by_status,
        }
    }

    pub fn check_integrity(&self) -> IntegrityReport {
        integrity::check_integrity(&self.store.read())
    }
}
