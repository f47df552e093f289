//! Demo dataset
//!
//! Loaded at start-up when `SEED_DEMO_DATA` is on. Records get short fixed
//! ids (`cat-5`, `store-1`, ...) and timestamps relative to the store clock.
//! Records go straight into the tables so no auto-notifications fire; flyer
//! counters and thumbnails still go through the integrity rules.

use shared::models::{
    AccountStatus, AppUser, Category, Collection, Flyer, Location, Notification,
    NotificationStatus, NotificationTarget, NotificationType, OpeningHours, Status, Store,
};

use super::integrity;
use super::pricing;
use super::store::CatalogStore;
use crate::notifications::{DeliveryMetrics, MANUAL_READ_RATE};

const HOUR: i64 = 3_600_000;
const DAY: i64 = 24 * HOUR;

const CATEGORIES: [&str; 6] = [
    "Supermarkets",
    "Electronics",
    "Fashion",
    "Home & Garden",
    "Furniture",
    "Sports",
];

/// (id, name, category, city, hours)
const STORES: [(&str, &str, &str, &str, &str); 4] = [
    ("store-1", "Mercadona", "cat-1", "Valencia", "9:00-21:30"),
    ("store-2", "MediaMarkt", "cat-2", "Madrid", "10:00-22:00"),
    ("store-3", "Zara", "cat-3", "Madrid", "10:00-21:00"),
    ("store-4", "Decathlon", "cat-6", "Barcelona", "9:30-21:30"),
];

/// (id, name, store)
const COLLECTIONS: [(&str, &str, &str); 4] = [
    ("col-1", "Weekly Offers", "store-1"),
    ("col-2", "Tech Week", "store-2"),
    ("col-3", "Summer Sale", "store-3"),
    ("col-4", "Back to Sport", "store-4"),
];

/// (id, name, collection, price, discount, starts in days, lasts days)
const FLYERS: [(&str, &str, &str, f64, f64, i64, i64); 7] = [
    ("flyer-1", "Olive Oil 1L", "col-1", 8.95, 20.0, -2, 7),
    ("flyer-2", "Fresh Salmon", "col-1", 15.99, 25.0, -1, 5),
    ("flyer-3", "Noise Cancelling Headphones", "col-2", 249.0, 30.0, -3, 10),
    ("flyer-4", "4K Television 55\"", "col-2", 599.0, 15.0, 5, 14),
    ("flyer-5", "Linen Shirt", "col-3", 29.95, 40.0, -20, 10),
    ("flyer-6", "Running Shoes", "col-4", 89.99, 0.0, -1, 30),
    ("flyer-7", "Yoga Mat", "col-4", 19.99, 10.0, -1, 30),
];

/// (id, email, name, city, language, status)
const USERS: [(&str, &str, &str, &str, &str, AccountStatus); 5] = [
    ("user-1", "lucia@example.com", "Lucía García", "Madrid", "es", AccountStatus::Active),
    ("user-2", "marc@example.com", "Marc Puig", "Barcelona", "ca", AccountStatus::Active),
    ("user-3", "emma@example.com", "Emma Wilson", "Valencia", "en", AccountStatus::Active),
    ("user-4", "pablo@example.com", "Pablo Ruiz", "Madrid", "es", AccountStatus::Suspended),
    ("user-5", "sofia@example.com", "Sofía López", "Sevilla", "es", AccountStatus::Pending),
];

/// Load the demo dataset into an empty store
pub fn seed_demo_data(store: &mut CatalogStore) {
    let now = store.now();
    // Everything is created "in the past", oldest first
    let mut created_at = now - 30 * DAY;
    let mut tick = || {
        created_at += HOUR;
        created_at
    };

    for (i, name) in CATEGORIES.iter().enumerate() {
        let ts = tick();
        let category = Category {
            id: format!("cat-{}", i + 1),
            name: name.to_string(),
            image: None,
            status: Status::Enable,
            created_at: ts,
            updated_at: ts,
        };
        store.categories.insert(category.id.clone(), category);
    }

    for (id, name, category_id, city, hours) in STORES {
        let ts = tick();
        let shop = Store {
            id: id.to_string(),
            name: name.to_string(),
            category_id: category_id.to_string(),
            location: Location::in_city(city),
            opening_hours: OpeningHours::every_day(hours),
            status: Status::Enable,
            website: None,
            description: None,
            image: None,
            created_at: ts,
            updated_at: ts,
        };
        store.stores.insert(shop.id.clone(), shop);
    }

    for (id, name, store_id) in COLLECTIONS {
        let ts = tick();
        let collection = Collection {
            id: id.to_string(),
            name: name.to_string(),
            store_id: store_id.to_string(),
            category_id: None,
            thumbnail_flyer_id: None,
            flyers_count: 0,
            status: Status::Enable,
            created_at: ts,
            updated_at: ts,
        };
        store.collections.insert(collection.id.clone(), collection);
    }

    for (id, name, collection_id, price, discount, starts_in, lasts) in FLYERS {
        let ts = tick();
        let Some(store_id) = store
            .collections
            .get(collection_id)
            .map(|c| c.store_id.clone())
        else {
            continue;
        };
        let start_date = now + starts_in * DAY;
        let flyer = Flyer {
            id: id.to_string(),
            name: name.to_string(),
            image: Some(format!("{id}.jpg")),
            price,
            discount_percentage: discount,
            final_price: pricing::final_price(price, discount),
            collection_id: collection_id.to_string(),
            store_id,
            start_date,
            end_date: start_date + lasts * DAY,
            status: Status::Enable,
            created_at: ts,
            updated_at: ts,
        };
        store.flyers.insert(flyer.id.clone(), flyer.clone());
        integrity::on_flyer_created(store, &flyer);
    }

    for (id, email, name, city, language, status) in USERS {
        let ts = tick();
        let user = AppUser {
            id: id.to_string(),
            email: email.to_string(),
            name: name.to_string(),
            profile_image: None,
            location: Location::in_city(city),
            language: language.to_string(),
            status,
            liked_flyers: vec!["flyer-1".to_string()],
            liked_stores: vec!["store-1".to_string()],
            last_login_at: Some(now - DAY),
            last_active_at: Some(now - HOUR),
            created_at: ts,
            updated_at: ts,
        };
        store.users.insert(user.id.clone(), user);
    }

    let ts = tick();
    let mut welcome = Notification {
        id: "notif-1".to_string(),
        notification_type: NotificationType::AdminMessage,
        title: "Welcome to the new deals app".to_string(),
        message: "Discover this week's best flyers from stores near you.".to_string(),
        target: NotificationTarget::AllUsers,
        status: NotificationStatus::Sent,
        scheduled_for: None,
        sent_at: Some(ts),
        store_id: None,
        collection_id: None,
        flyer_id: None,
        total_target_users: None,
        delivered_count: None,
        read_count: None,
        created_at: ts,
        updated_at: ts,
    };
    DeliveryMetrics::simulate(store.user_count() as u32, MANUAL_READ_RATE).apply_to(&mut welcome);
    store.save_notification(welcome);

    tracing::info!(
        categories = store.categories.len(),
        stores = store.stores.len(),
        collections = store.collections.len(),
        flyers = store.flyers.len(),
        users = store.users.len(),
        "Demo data seeded"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_is_consistent() {
        let mut store = CatalogStore::default();
        seed_demo_data(&mut store);

        assert_eq!(store.get_category("cat-5").unwrap().name, "Furniture");
        assert_eq!(store.list_categories().len(), 6);
        assert_eq!(store.list_notifications().len(), 1);
        assert_eq!(store.get_collection("col-1").unwrap().flyers_count, 2);
        assert_eq!(
            store.get_collection("col-1").unwrap().thumbnail_flyer_id.as_deref(),
            Some("flyer-1")
        );
        assert!(integrity::check_integrity(&store).consistent);
    }
}
