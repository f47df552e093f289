//! Read enrichment
//!
//! Joins names and counts onto records at read time. Nothing here is stored;
//! each view is built from the live tables and the current clock.

use serde::Serialize;
use shared::models::{AppUser, Category, Collection, Flyer, Store};

use super::activation;
use super::store::CatalogStore;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryView {
    #[serde(flatten)]
    pub category: Category,
    pub stores_count: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreView {
    #[serde(flatten)]
    pub store: Store,
    pub category_name: Option<String>,
    pub active_flyers_count: u32,
    pub collections_count: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionView {
    #[serde(flatten)]
    pub collection: Collection,
    pub store_name: Option<String>,
    /// Collection's own category, else its store's
    pub category_name: Option<String>,
    pub thumbnail_image: Option<String>,
    pub active_flyers_count: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlyerView {
    #[serde(flatten)]
    pub flyer: Flyer,
    pub is_active: bool,
    pub collection_name: Option<String>,
    pub store_name: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppUserView {
    #[serde(flatten)]
    pub user: AppUser,
    pub liked_flyers_count: u32,
    pub liked_stores_count: u32,
}

impl CatalogStore {
    fn category_name(&self, id: &str) -> Option<String> {
        self.categories.get(id).map(|c| c.name.clone())
    }

    fn store_name(&self, id: &str) -> Option<String> {
        self.stores.get(id).map(|s| s.name.clone())
    }

    pub fn category_view(&self, category: &Category) -> CategoryView {
        CategoryView {
            stores_count: self.stores_in_category(&category.id) as u32,
            category: category.clone(),
        }
    }

    pub fn store_view(&self, store: &Store) -> StoreView {
        let now = self.now();
        let active_flyers_count = self
            .flyers
            .values()
            .filter(|f| f.store_id == store.id && activation::is_active(f, now))
            .count() as u32;
        StoreView {
            category_name: self.category_name(&store.category_id),
            active_flyers_count,
            collections_count: self.collections_of_store(&store.id) as u32,
            store: store.clone(),
        }
    }

    pub fn collection_view(&self, collection: &Collection) -> CollectionView {
        let now = self.now();
        let category_name = match &collection.category_id {
            Some(id) => self.category_name(id),
            None => self
                .stores
                .get(&collection.store_id)
                .and_then(|s| self.category_name(&s.category_id)),
        };
        let thumbnail_image = collection
            .thumbnail_flyer_id
            .as_ref()
            .and_then(|id| self.flyers.get(id))
            .and_then(|f| f.image.clone());
        let active_flyers_count = self
            .flyers_in_collection(&collection.id)
            .filter(|f| activation::is_active(f, now))
            .count() as u32;

        CollectionView {
            store_name: self.store_name(&collection.store_id),
            category_name,
            thumbnail_image,
            active_flyers_count,
            collection: collection.clone(),
        }
    }

    pub fn flyer_view(&self, flyer: &Flyer) -> FlyerView {
        FlyerView {
            is_active: activation::is_active(flyer, self.now()),
            collection_name: self
                .collections
                .get(&flyer.collection_id)
                .map(|c| c.name.clone()),
            store_name: self.store_name(&flyer.store_id),
            flyer: flyer.clone(),
        }
    }

    pub fn user_view(&self, user: &AppUser) -> AppUserView {
        AppUserView {
            liked_flyers_count: user.liked_flyers.len() as u32,
            liked_stores_count: user.liked_stores.len() as u32,
            user: user.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::clock::ManualClock;
    use shared::models::{CategoryCreate, CollectionCreate, FlyerCreate, Status, StoreCreate};
    use std::sync::Arc;

    const DAY: i64 = 86_400_000;

    #[test]
    fn test_views_follow_live_state() {
        let clock = Arc::new(ManualClock::new(10 * DAY));
        let mut store = CatalogStore::new(clock.clone());
        let cat = store
            .create_category(CategoryCreate {
                name: "Furniture".into(),
                ..Default::default()
            })
            .unwrap();
        let shop = store
            .create_store(StoreCreate {
                name: "IKEA".into(),
                category_id: cat.id.clone(),
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
        let flyer = store
            .create_flyer(FlyerCreate {
                name: "Sofa".into(),
                image: Some("sofa.jpg".into()),
                price: 300.0,
                collection_id: collection.id.clone(),
                start_date: 5 * DAY,
                end_date: 15 * DAY,
                status: Some(Status::Enable),
                ..Default::default()
            })
            .unwrap()
            .record;

        let category = store.category_view(&cat);
        assert_eq!(category.stores_count, 1);

        let shop_view = store.store_view(&shop);
        assert_eq!(shop_view.category_name.as_deref(), Some("Furniture"));
        assert_eq!(shop_view.active_flyers_count, 1);
        assert_eq!(shop_view.collections_count, 1);

        let collection = store.get_collection(&collection.id).unwrap().clone();
        let col_view = store.collection_view(&collection);
        assert_eq!(col_view.store_name.as_deref(), Some("IKEA"));
        assert_eq!(col_view.category_name.as_deref(), Some("Furniture"));
        assert_eq!(col_view.thumbnail_image.as_deref(), Some("sofa.jpg"));
        assert_eq!(col_view.active_flyers_count, 1);

        assert!(store.flyer_view(&flyer).is_active);
        clock.set(20 * DAY);
        assert!(!store.flyer_view(&flyer).is_active);
        assert_eq!(store.store_view(&shop).active_flyers_count, 0);
    }

    #[test]
    fn test_view_serializes_flat() {
        let store = CatalogStore::default();
        let category = Category {
            id: "cat-1".into(),
            name: "Food".into(),
            image: None,
            status: Status::Enable,
            created_at: 1,
            updated_at: 1,
        };
        let json = serde_json::to_value(store.category_view(&category)).unwrap();
        assert_eq!(json["id"], "cat-1");
        assert_eq!(json["storesCount"], 0);
        assert_eq!(json["createdAt"], 1);
    }
}
