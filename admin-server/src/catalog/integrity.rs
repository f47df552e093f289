//! Referential integrity rules
//!
//! Called from inside [`CatalogStore`] mutations, after the primary change
//! has been applied to its table and before the mutation returns. The
//! collection flyer counter is maintained here; [`check_integrity`] recomputes
//! it from the live flyers and reports any drift.

use serde::Serialize;

use super::store::CatalogStore;
use crate::utils::{AppError, AppResult, ErrorCode};

/// Remove every flyer of a deleted collection; returns how many went
///
/// Affects only matching records, so running it again is a no-op.
pub fn on_collection_deleted(store: &mut CatalogStore, collection_id: &str) -> usize {
    let before = store.flyers.len();
    store.flyers.retain(|_, f| f.collection_id != collection_id);
    let removed = before - store.flyers.len();
    tracing::debug!(collection_id, removed, "Cascaded flyer deletion");
    removed
}

/// Count the new flyer and adopt it as thumbnail if the collection has none
///
/// The flyer must already be in the table.
pub fn on_flyer_created(store: &mut CatalogStore, flyer: &shared::models::Flyer) {
    let now = store.now();
    if let Some(collection) = store.collections.get_mut(&flyer.collection_id) {
        collection.flyers_count += 1;
        if collection.thumbnail_flyer_id.is_none() {
            collection.thumbnail_flyer_id = Some(flyer.id.clone());
        }
        collection.updated_at = now;
    }
}

/// Uncount a flyer that left its collection
///
/// The flyer must already be gone from the collection (deleted or moved). If
/// it was the thumbnail, the first remaining flyer takes over, or the
/// thumbnail is cleared.
pub fn on_flyer_deleted(store: &mut CatalogStore, flyer: &shared::models::Flyer) {
    let now = store.now();
    let replacement = store
        .flyers_in_collection(&flyer.collection_id)
        .next()
        .map(|f| f.id.clone());

    if let Some(collection) = store.collections.get_mut(&flyer.collection_id) {
        collection.flyers_count = collection.flyers_count.saturating_sub(1);
        if collection.thumbnail_flyer_id.as_deref() == Some(flyer.id.as_str()) {
            collection.thumbnail_flyer_id = replacement;
        }
        collection.updated_at = now;
    }
}

/// Re-copy the collection's store onto each of its flyers
pub fn on_collection_store_changed(store: &mut CatalogStore, collection_id: &str) -> usize {
    let Some(store_id) = store
        .collections
        .get(collection_id)
        .map(|c| c.store_id.clone())
    else {
        return 0;
    };
    let now = store.now();
    let mut touched = 0;
    for flyer in store
        .flyers
        .values_mut()
        .filter(|f| f.collection_id == collection_id)
    {
        flyer.store_id = store_id.clone();
        flyer.updated_at = now;
        touched += 1;
    }
    tracing::debug!(collection_id, store_id = %store_id, touched, "Re-linked flyers to store");
    touched
}

pub fn ensure_category_deletable(store: &CatalogStore, category_id: &str) -> AppResult<()> {
    let stores_count = store.stores_in_category(category_id);
    if stores_count > 0 {
        return Err(AppError::conflict(
            ErrorCode::CategoryHasStores,
            format!("Cannot delete category: {stores_count} store(s) still use it"),
        )
        .with_detail("storesCount", stores_count as u64));
    }
    Ok(())
}

pub fn ensure_store_deletable(store: &CatalogStore, store_id: &str) -> AppResult<()> {
    let collections_count = store.collections_of_store(store_id);
    if collections_count > 0 {
        return Err(AppError::conflict(
            ErrorCode::StoreHasCollections,
            format!("Cannot delete store: {collections_count} collection(s) still belong to it"),
        )
        .with_detail("collectionsCount", collections_count as u64));
    }
    Ok(())
}

pub fn ensure_thumbnail_member(
    store: &CatalogStore,
    collection_id: &str,
    flyer_id: &str,
) -> AppResult<()> {
    match store.flyers.get(flyer_id) {
        Some(f) if f.collection_id == collection_id => Ok(()),
        _ => Err(AppError::new(ErrorCode::ThumbnailNotInCollection)
            .with_detail("thumbnailFlyerId", flyer_id)),
    }
}

// =============================================================================
// Invariant checker
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(
    tag = "kind",
    rename_all = "SCREAMING_SNAKE_CASE",
    rename_all_fields = "camelCase"
)]
pub enum IntegrityViolation {
    /// Stored `flyersCount` differs from the live flyer count
    FlyerCountDrift {
        collection_id: String,
        stored: u32,
        actual: u32,
    },
    /// Thumbnail points at a missing flyer or one from another collection
    StaleThumbnail {
        collection_id: String,
        flyer_id: String,
    },
    /// Collection has flyers but no thumbnail
    MissingThumbnail { collection_id: String },
    /// Flyer references a collection that no longer exists
    OrphanFlyer {
        flyer_id: String,
        collection_id: String,
    },
    /// Flyer's denormalized store differs from its collection's store
    StoreMismatch {
        flyer_id: String,
        expected: String,
        actual: String,
    },
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrityReport {
    pub checked_at: i64,
    pub collections_checked: usize,
    pub flyers_checked: usize,
    pub consistent: bool,
    pub violations: Vec<IntegrityViolation>,
}

/// Recompute maintained state from live records and report disagreements
pub fn check_integrity(store: &CatalogStore) -> IntegrityReport {
    let mut violations = Vec::new();

    for collection in store.collections.values() {
        let actual = store.flyers_in_collection(&collection.id).count() as u32;
        if actual != collection.flyers_count {
            violations.push(IntegrityViolation::FlyerCountDrift {
                collection_id: collection.id.clone(),
                stored: collection.flyers_count,
                actual,
            });
        }
        match &collection.thumbnail_flyer_id {
            Some(flyer_id) => {
                let member = store
                    .flyers
                    .get(flyer_id)
                    .is_some_and(|f| f.collection_id == collection.id);
                if !member {
                    violations.push(IntegrityViolation::StaleThumbnail {
                        collection_id: collection.id.clone(),
                        flyer_id: flyer_id.clone(),
                    });
                }
            }
            None if actual > 0 => violations.push(IntegrityViolation::MissingThumbnail {
                collection_id: collection.id.clone(),
            }),
            None => {}
        }
    }

    for flyer in store.flyers.values() {
        match store.collections.get(&flyer.collection_id) {
            None => violations.push(IntegrityViolation::OrphanFlyer {
                flyer_id: flyer.id.clone(),
                collection_id: flyer.collection_id.clone(),
            }),
            Some(c) if c.store_id != flyer.store_id => {
                violations.push(IntegrityViolation::StoreMismatch {
                    flyer_id: flyer.id.clone(),
                    expected: c.store_id.clone(),
                    actual: flyer.store_id.clone(),
                })
            }
            Some(_) => {}
        }
    }

    if !violations.is_empty() {
        tracing::warn!(violations = violations.len(), "Catalog integrity check failed");
    }

    IntegrityReport {
        checked_at: store.now(),
        collections_checked: store.collections.len(),
        flyers_checked: store.flyers.len(),
        consistent: violations.is_empty(),
        violations,
    }
}
