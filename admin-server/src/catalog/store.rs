//! CatalogStore - authoritative in-memory tables
//!
//! Owns every Category, Store, Collection, Flyer, AppUser and Notification.
//! Mutations are the only way to change state; each one validates first,
//! then applies the merged record, stamps `updatedAt`, and runs the
//! integrity rules before returning the settled record.
//!
//! Tables are `BTreeMap`s keyed by id so iteration order (and therefore the
//! tie order of listings) is deterministic.

use std::collections::BTreeMap;
use std::sync::Arc;

use shared::models::{
    AppUser, AppUserCreate, AppUserUpdate, Category, CategoryCreate, CategoryUpdate, Collection,
    CollectionCreate, CollectionUpdate, Flyer, FlyerCreate, FlyerUpdate, Notification, Store,
    StoreCreate, StoreUpdate,
};
use shared::util::new_id;

use super::clock::{Clock, SystemClock};
use super::events::{CatalogEvent, Committed};
use super::{integrity, pricing};
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MAX_URL_LEN, validate_discount, validate_email,
    validate_optional_text, validate_price, validate_required_text, validate_window,
};
use crate::utils::{AppError, AppResult, ErrorCode};

/// Language assigned to app users created without one
pub const DEFAULT_LANGUAGE: &str = "en";

/// A payload referenced a record that does not exist
fn missing_reference(field: &str, id: &str) -> AppError {
    AppError::with_message(
        ErrorCode::ValidationFailed,
        format!("{field} references an unknown record: {id}"),
    )
    .with_detail(field, id)
}

/// In-memory catalog
#[derive(Debug)]
pub struct CatalogStore {
    pub(crate) categories: BTreeMap<String, Category>,
    pub(crate) stores: BTreeMap<String, Store>,
    pub(crate) collections: BTreeMap<String, Collection>,
    pub(crate) flyers: BTreeMap<String, Flyer>,
    pub(crate) users: BTreeMap<String, AppUser>,
    pub(crate) notifications: BTreeMap<String, Notification>,
    clock: Arc<dyn Clock>,
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}

impl CatalogStore {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            categories: BTreeMap::new(),
            stores: BTreeMap::new(),
            collections: BTreeMap::new(),
            flyers: BTreeMap::new(),
            users: BTreeMap::new(),
            notifications: BTreeMap::new(),
            clock,
        }
    }

    /// Current time in Unix millis
    pub fn now(&self) -> i64 {
        self.clock.now_millis()
    }

    // =========================================================================
    // Category
    // =========================================================================

    pub fn get_category(&self, id: &str) -> AppResult<&Category> {
        self.categories
            .get(id)
            .ok_or_else(|| AppError::missing(ErrorCode::CategoryNotFound, id))
    }

    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.values()
    }

    pub fn list_categories(&self) -> Vec<Category> {
        self.categories.values().cloned().collect()
    }

    pub fn create_category(&mut self, data: CategoryCreate) -> AppResult<Category> {
        validate_required_text(&data.name, "name", MAX_NAME_LEN)?;
        validate_optional_text(&data.image, "image", MAX_URL_LEN)?;
        let name = data.name.trim().to_string();
        self.ensure_category_name_free(&name, None)?;

        let now = self.now();
        let category = Category {
            id: new_id("cat"),
            name,
            image: data.image,
            status: data.status.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        };
        self.categories
            .insert(category.id.clone(), category.clone());

        tracing::info!(category_id = %category.id, name = %category.name, "Category created");
        Ok(category)
    }

    pub fn update_category(&mut self, id: &str, data: CategoryUpdate) -> AppResult<Category> {
        let mut category = self.get_category(id)?.clone();

        if let Some(name) = data.name {
            validate_required_text(&name, "name", MAX_NAME_LEN)?;
            let name = name.trim().to_string();
            self.ensure_category_name_free(&name, Some(id))?;
            category.name = name;
        }
        if data.image.is_some() {
            validate_optional_text(&data.image, "image", MAX_URL_LEN)?;
            category.image = data.image;
        }
        if let Some(status) = data.status {
            category.status = status;
        }
        category.updated_at = self.now();

        self.categories.insert(id.to_string(), category.clone());
        tracing::info!(category_id = %id, "Category updated");
        Ok(category)
    }

    /// Fails with `CategoryHasStores` while any store references the category
    pub fn delete_category(&mut self, id: &str) -> AppResult<Category> {
        self.get_category(id)?;
        integrity::ensure_category_deletable(self, id)?;

        let removed = self
            .categories
            .remove(id)
            .ok_or_else(|| AppError::missing(ErrorCode::CategoryNotFound, id))?;
        tracing::info!(category_id = %id, "Category deleted");
        Ok(removed)
    }

    fn ensure_category_name_free(&self, name: &str, except: Option<&str>) -> AppResult<()> {
        let wanted = name.to_lowercase();
        let taken = self
            .categories
            .values()
            .any(|c| Some(c.id.as_str()) != except && c.name.to_lowercase() == wanted);
        if taken {
            return Err(AppError::conflict(
                ErrorCode::CategoryNameExists,
                format!("Category name already exists: {name}"),
            )
            .with_detail("name", name));
        }
        Ok(())
    }

    // =========================================================================
    // Store
    // =========================================================================

    pub fn get_store(&self, id: &str) -> AppResult<&Store> {
        self.stores
            .get(id)
            .ok_or_else(|| AppError::missing(ErrorCode::StoreNotFound, id))
    }

    pub fn stores(&self) -> impl Iterator<Item = &Store> {
        self.stores.values()
    }

    pub fn list_stores(&self) -> Vec<Store> {
        self.stores.values().cloned().collect()
    }

    /// Emits [`CatalogEvent::StoreCreated`]
    pub fn create_store(&mut self, data: StoreCreate) -> AppResult<Committed<Store>> {
        validate_required_text(&data.name, "name", MAX_NAME_LEN)?;
        validate_optional_text(&data.website, "website", MAX_URL_LEN)?;
        validate_optional_text(&data.image, "image", MAX_URL_LEN)?;
        validate_optional_text(&data.description, "description", MAX_NOTE_LEN)?;
        if !self.categories.contains_key(&data.category_id) {
            return Err(missing_reference("categoryId", &data.category_id));
        }
        let name = data.name.trim().to_string();
        self.ensure_store_name_free(&name, None)?;

        let now = self.now();
        let store = Store {
            id: new_id("store"),
            name,
            category_id: data.category_id,
            location: data.location,
            opening_hours: data.opening_hours,
            status: data.status.unwrap_or_default(),
            website: data.website,
            description: data.description,
            image: data.image,
            created_at: now,
            updated_at: now,
        };
        self.stores.insert(store.id.clone(), store.clone());

        tracing::info!(store_id = %store.id, name = %store.name, "Store created");
        let event = CatalogEvent::StoreCreated {
            store_id: store.id.clone(),
        };
        Ok(Committed::new(store).with_event(Some(event)))
    }

    pub fn update_store(&mut self, id: &str, data: StoreUpdate) -> AppResult<Store> {
        let mut store = self.get_store(id)?.clone();

        if let Some(name) = data.name {
            validate_required_text(&name, "name", MAX_NAME_LEN)?;
            let name = name.trim().to_string();
            self.ensure_store_name_free(&name, Some(id))?;
            store.name = name;
        }
        if let Some(category_id) = data.category_id {
            if !self.categories.contains_key(&category_id) {
                return Err(missing_reference("categoryId", &category_id));
            }
            store.category_id = category_id;
        }
        if let Some(location) = data.location {
            store.location = location;
        }
        if let Some(hours) = data.opening_hours {
            store.opening_hours = hours;
        }
        if let Some(status) = data.status {
            store.status = status;
        }
        if data.website.is_some() {
            validate_optional_text(&data.website, "website", MAX_URL_LEN)?;
            store.website = data.website;
        }
        if data.description.is_some() {
            validate_optional_text(&data.description, "description", MAX_NOTE_LEN)?;
            store.description = data.description;
        }
        if data.image.is_some() {
            validate_optional_text(&data.image, "image", MAX_URL_LEN)?;
            store.image = data.image;
        }
        store.updated_at = self.now();

        self.stores.insert(id.to_string(), store.clone());
        tracing::info!(store_id = %id, "Store updated");
        Ok(store)
    }

    /// Fails with `StoreHasCollections` while any collection references the store
    pub fn delete_store(&mut self, id: &str) -> AppResult<Store> {
        self.get_store(id)?;
        integrity::ensure_store_deletable(self, id)?;

        let removed = self
            .stores
            .remove(id)
            .ok_or_else(|| AppError::missing(ErrorCode::StoreNotFound, id))?;
        tracing::info!(store_id = %id, "Store deleted");
        Ok(removed)
    }

    fn ensure_store_name_free(&self, name: &str, except: Option<&str>) -> AppResult<()> {
        let taken = self
            .stores
            .values()
            .any(|s| Some(s.id.as_str()) != except && s.name == name);
        if taken {
            return Err(AppError::conflict(
                ErrorCode::StoreNameExists,
                format!("Store name already exists: {name}"),
            )
            .with_detail("name", name));
        }
        Ok(())
    }

    // =========================================================================
    // Collection
    // =========================================================================

    pub fn get_collection(&self, id: &str) -> AppResult<&Collection> {
        self.collections
            .get(id)
            .ok_or_else(|| AppError::missing(ErrorCode::CollectionNotFound, id))
    }

    pub fn collections(&self) -> impl Iterator<Item = &Collection> {
        self.collections.values()
    }

    pub fn list_collections(&self) -> Vec<Collection> {
        self.collections.values().cloned().collect()
    }

    /// Emits [`CatalogEvent::CollectionCreated`]
    pub fn create_collection(&mut self, data: CollectionCreate) -> AppResult<Committed<Collection>> {
        validate_required_text(&data.name, "name", MAX_NAME_LEN)?;
        if !self.stores.contains_key(&data.store_id) {
            return Err(missing_reference("storeId", &data.store_id));
        }
        if let Some(category_id) = &data.category_id
            && !self.categories.contains_key(category_id)
        {
            return Err(missing_reference("categoryId", category_id));
        }

        let now = self.now();
        let collection = Collection {
            id: new_id("col"),
            name: data.name.trim().to_string(),
            store_id: data.store_id,
            category_id: data.category_id,
            thumbnail_flyer_id: None,
            flyers_count: 0,
            status: data.status.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        };
        self.collections
            .insert(collection.id.clone(), collection.clone());

        tracing::info!(
            collection_id = %collection.id,
            store_id = %collection.store_id,
            "Collection created"
        );
        let event = CatalogEvent::CollectionCreated {
            collection_id: collection.id.clone(),
            store_id: collection.store_id.clone(),
        };
        Ok(Committed::new(collection).with_event(Some(event)))
    }

    pub fn update_collection(&mut self, id: &str, data: CollectionUpdate) -> AppResult<Collection> {
        let mut collection = self.get_collection(id)?.clone();

        if let Some(name) = data.name {
            validate_required_text(&name, "name", MAX_NAME_LEN)?;
            collection.name = name.trim().to_string();
        }
        let store_changed = match data.store_id {
            Some(store_id) if store_id != collection.store_id => {
                if !self.stores.contains_key(&store_id) {
                    return Err(missing_reference("storeId", &store_id));
                }
                collection.store_id = store_id;
                true
            }
            _ => false,
        };
        if let Some(category_id) = data.category_id {
            if !self.categories.contains_key(&category_id) {
                return Err(missing_reference("categoryId", &category_id));
            }
            collection.category_id = Some(category_id);
        }
        if let Some(flyer_id) = data.thumbnail_flyer_id {
            integrity::ensure_thumbnail_member(self, id, &flyer_id)?;
            collection.thumbnail_flyer_id = Some(flyer_id);
        }
        if let Some(status) = data.status {
            collection.status = status;
        }
        collection.updated_at = self.now();

        self.collections.insert(id.to_string(), collection.clone());
        if store_changed {
            integrity::on_collection_store_changed(self, id);
        }

        tracing::info!(collection_id = %id, "Collection updated");
        Ok(collection)
    }

    /// Removes the collection and all of its flyers
    ///
    /// Returns the removed collection and how many flyers went with it.
    pub fn delete_collection(&mut self, id: &str) -> AppResult<(Collection, usize)> {
        let removed = self
            .collections
            .remove(id)
            .ok_or_else(|| AppError::missing(ErrorCode::CollectionNotFound, id))?;
        let flyers_removed = integrity::on_collection_deleted(self, id);

        tracing::info!(collection_id = %id, flyers_removed, "Collection deleted");
        Ok((removed, flyers_removed))
    }

    // =========================================================================
    // Flyer
    // =========================================================================

    pub fn get_flyer(&self, id: &str) -> AppResult<&Flyer> {
        self.flyers
            .get(id)
            .ok_or_else(|| AppError::missing(ErrorCode::FlyerNotFound, id))
    }

    pub fn flyers(&self) -> impl Iterator<Item = &Flyer> {
        self.flyers.values()
    }

    pub fn list_flyers(&self) -> Vec<Flyer> {
        self.flyers.values().cloned().collect()
    }

    fn store_of_collection(&self, collection_id: &str) -> AppResult<String> {
        self.collections
            .get(collection_id)
            .map(|c| c.store_id.clone())
            .ok_or_else(|| missing_reference("collectionId", collection_id))
    }

    /// Emits [`CatalogEvent::DiscountIncreased`] when created with a discount
    pub fn create_flyer(&mut self, data: FlyerCreate) -> AppResult<Committed<Flyer>> {
        validate_required_text(&data.name, "name", MAX_NAME_LEN)?;
        validate_optional_text(&data.image, "image", MAX_URL_LEN)?;
        validate_price(data.price)?;
        validate_discount(data.discount_percentage)?;
        validate_window(data.start_date, data.end_date)?;
        let store_id = self.store_of_collection(&data.collection_id)?;

        let now = self.now();
        let flyer = Flyer {
            id: new_id("flyer"),
            name: data.name.trim().to_string(),
            image: data.image,
            price: data.price,
            discount_percentage: data.discount_percentage,
            final_price: pricing::final_price(data.price, data.discount_percentage),
            collection_id: data.collection_id,
            store_id,
            start_date: data.start_date,
            end_date: data.end_date,
            status: data.status.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        };
        self.flyers.insert(flyer.id.clone(), flyer.clone());
        integrity::on_flyer_created(self, &flyer);

        tracing::info!(
            flyer_id = %flyer.id,
            collection_id = %flyer.collection_id,
            final_price = flyer.final_price,
            "Flyer created"
        );
        let event = CatalogEvent::discount_change(
            &flyer.id,
            &flyer.collection_id,
            &flyer.store_id,
            0.0,
            flyer.discount_percentage,
        );
        Ok(Committed::new(flyer).with_event(event))
    }

    /// Emits [`CatalogEvent::DiscountIncreased`] when the discount goes up
    ///
    /// Changing `collectionId` moves the flyer: the old collection is treated
    /// as having lost it and the new one as having gained it.
    pub fn update_flyer(&mut self, id: &str, data: FlyerUpdate) -> AppResult<Committed<Flyer>> {
        let previous = self.get_flyer(id)?.clone();
        let mut flyer = previous.clone();

        if let Some(name) = data.name {
            validate_required_text(&name, "name", MAX_NAME_LEN)?;
            flyer.name = name.trim().to_string();
        }
        if data.image.is_some() {
            validate_optional_text(&data.image, "image", MAX_URL_LEN)?;
            flyer.image = data.image;
        }
        if let Some(price) = data.price {
            flyer.price = price;
        }
        if let Some(discount) = data.discount_percentage {
            flyer.discount_percentage = discount;
        }
        if let Some(start) = data.start_date {
            flyer.start_date = start;
        }
        if let Some(end) = data.end_date {
            flyer.end_date = end;
        }
        if let Some(status) = data.status {
            flyer.status = status;
        }
        validate_price(flyer.price)?;
        validate_discount(flyer.discount_percentage)?;
        validate_window(flyer.start_date, flyer.end_date)?;

        let moved = match data.collection_id {
            Some(collection_id) if collection_id != previous.collection_id => {
                flyer.store_id = self.store_of_collection(&collection_id)?;
                flyer.collection_id = collection_id;
                true
            }
            _ => false,
        };

        flyer.final_price = pricing::final_price(flyer.price, flyer.discount_percentage);
        flyer.updated_at = self.now();
        self.flyers.insert(id.to_string(), flyer.clone());

        if moved {
            integrity::on_flyer_deleted(self, &previous);
            integrity::on_flyer_created(self, &flyer);
        }

        tracing::info!(flyer_id = %id, moved, "Flyer updated");
        let event = CatalogEvent::discount_change(
            &flyer.id,
            &flyer.collection_id,
            &flyer.store_id,
            previous.discount_percentage,
            flyer.discount_percentage,
        );
        Ok(Committed::new(flyer).with_event(event))
    }

    pub fn delete_flyer(&mut self, id: &str) -> AppResult<Flyer> {
        let removed = self
            .flyers
            .remove(id)
            .ok_or_else(|| AppError::missing(ErrorCode::FlyerNotFound, id))?;
        integrity::on_flyer_deleted(self, &removed);

        tracing::info!(flyer_id = %id, collection_id = %removed.collection_id, "Flyer deleted");
        Ok(removed)
    }

    // =========================================================================
    // AppUser
    // =========================================================================

    pub fn get_user(&self, id: &str) -> AppResult<&AppUser> {
        self.users
            .get(id)
            .ok_or_else(|| AppError::missing(ErrorCode::UserNotFound, id))
    }

    pub fn users(&self) -> impl Iterator<Item = &AppUser> {
        self.users.values()
    }

    pub fn list_users(&self) -> Vec<AppUser> {
        self.users.values().cloned().collect()
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    pub fn create_user(&mut self, data: AppUserCreate) -> AppResult<AppUser> {
        let email = data.email.trim().to_string();
        validate_email(&email)?;
        validate_required_text(&data.name, "name", MAX_NAME_LEN)?;
        validate_optional_text(&data.profile_image, "profileImage", MAX_URL_LEN)?;
        self.ensure_email_free(&email, None)?;

        let now = self.now();
        let user = AppUser {
            id: new_id("user"),
            email,
            name: data.name.trim().to_string(),
            profile_image: data.profile_image,
            location: data.location,
            language: data
                .language
                .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
            status: data.status.unwrap_or_default(),
            liked_flyers: data.liked_flyers,
            liked_stores: data.liked_stores,
            last_login_at: None,
            last_active_at: None,
            created_at: now,
            updated_at: now,
        };
        self.users.insert(user.id.clone(), user.clone());

        tracing::info!(user_id = %user.id, "App user created");
        Ok(user)
    }

    pub fn update_user(&mut self, id: &str, data: AppUserUpdate) -> AppResult<AppUser> {
        let mut user = self.get_user(id)?.clone();

        if let Some(email) = data.email {
            let email = email.trim().to_string();
            validate_email(&email)?;
            self.ensure_email_free(&email, Some(id))?;
            user.email = email;
        }
        if let Some(name) = data.name {
            validate_required_text(&name, "name", MAX_NAME_LEN)?;
            user.name = name.trim().to_string();
        }
        if data.profile_image.is_some() {
            validate_optional_text(&data.profile_image, "profileImage", MAX_URL_LEN)?;
            user.profile_image = data.profile_image;
        }
        if let Some(location) = data.location {
            user.location = location;
        }
        if let Some(language) = data.language {
            user.language = language;
        }
        if let Some(status) = data.status {
            user.status = status;
        }
        if let Some(liked) = data.liked_flyers {
            user.liked_flyers = liked;
        }
        if let Some(liked) = data.liked_stores {
            user.liked_stores = liked;
        }
        if data.last_login_at.is_some() {
            user.last_login_at = data.last_login_at;
        }
        if data.last_active_at.is_some() {
            user.last_active_at = data.last_active_at;
        }
        user.updated_at = self.now();

        self.users.insert(id.to_string(), user.clone());
        tracing::info!(user_id = %id, "App user updated");
        Ok(user)
    }

    pub fn delete_user(&mut self, id: &str) -> AppResult<AppUser> {
        let removed = self
            .users
            .remove(id)
            .ok_or_else(|| AppError::missing(ErrorCode::UserNotFound, id))?;
        tracing::info!(user_id = %id, "App user deleted");
        Ok(removed)
    }

    fn ensure_email_free(&self, email: &str, except: Option<&str>) -> AppResult<()> {
        let taken = self
            .users
            .values()
            .any(|u| Some(u.id.as_str()) != except && u.email.eq_ignore_ascii_case(email));
        if taken {
            return Err(AppError::conflict(
                ErrorCode::UserEmailExists,
                format!("Email already registered: {email}"),
            )
            .with_detail("email", email));
        }
        Ok(())
    }

    // =========================================================================
    // Notification
    //
    // Lifecycle rules live in the notification engine; these are the raw
    // table operations it builds on.
    // =========================================================================

    pub fn get_notification(&self, id: &str) -> AppResult<&Notification> {
        self.notifications
            .get(id)
            .ok_or_else(|| AppError::missing(ErrorCode::NotificationNotFound, id))
    }

    pub fn notifications(&self) -> impl Iterator<Item = &Notification> {
        self.notifications.values()
    }

    pub fn list_notifications(&self) -> Vec<Notification> {
        self.notifications.values().cloned().collect()
    }

    /// Insert or replace a notification record
    pub fn save_notification(&mut self, notification: Notification) -> Notification {
        self.notifications
            .insert(notification.id.clone(), notification.clone());
        notification
    }

    pub fn remove_notification(&mut self, id: &str) -> AppResult<Notification> {
        self.notifications
            .remove(id)
            .ok_or_else(|| AppError::missing(ErrorCode::NotificationNotFound, id))
    }

    // =========================================================================
    // Reference counts
    // =========================================================================

    pub fn stores_in_category(&self, category_id: &str) -> usize {
        self.stores
            .values()
            .filter(|s| s.category_id == category_id)
            .count()
    }

    pub fn collections_of_store(&self, store_id: &str) -> usize {
        self.collections
            .values()
            .filter(|c| c.store_id == store_id)
            .count()
    }

    pub fn flyers_in_collection<'a>(
        &'a self,
        collection_id: &'a str,
    ) -> impl Iterator<Item = &'a Flyer> + 'a {
        self.flyers
            .values()
            .filter(move |f| f.collection_id == collection_id)
    }
}
