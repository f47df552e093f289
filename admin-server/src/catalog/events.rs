//! Post-commit catalog events
//!
//! Mutations that other components react to return their settled record
//! together with the events they produced. The table below is the complete
//! list; everything else commits silently.
//!
//! | Mutation                       | Event               |
//! |--------------------------------|---------------------|
//! | `create_store`                 | `StoreCreated`      |
//! | `create_collection`            | `CollectionCreated` |
//! | `create_flyer` (discount > 0)  | `DiscountIncreased` |
//! | `update_flyer` (discount up)   | `DiscountIncreased` |

#[derive(Debug, Clone, PartialEq)]
pub enum CatalogEvent {
    StoreCreated {
        store_id: String,
    },
    CollectionCreated {
        collection_id: String,
        store_id: String,
    },
    /// New discount strictly greater than the previous one, and above zero
    DiscountIncreased {
        flyer_id: String,
        collection_id: String,
        store_id: String,
        previous: f64,
        current: f64,
    },
}

impl CatalogEvent {
    pub fn name(&self) -> &'static str {
        match self {
            CatalogEvent::StoreCreated { .. } => "store_created",
            CatalogEvent::CollectionCreated { .. } => "collection_created",
            CatalogEvent::DiscountIncreased { .. } => "discount_increased",
        }
    }

    /// Discount rule for flyer writes
    pub fn discount_change(
        flyer_id: &str,
        collection_id: &str,
        store_id: &str,
        previous: f64,
        current: f64,
    ) -> Option<Self> {
        (current > previous && current > 0.0).then(|| CatalogEvent::DiscountIncreased {
            flyer_id: flyer_id.to_string(),
            collection_id: collection_id.to_string(),
            store_id: store_id.to_string(),
            previous,
            current,
        })
    }
}

/// A settled record plus the events its mutation produced
#[derive(Debug, Clone)]
pub struct Committed<T> {
    pub record: T,
    pub events: Vec<CatalogEvent>,
}

impl<T> Committed<T> {
    pub fn new(record: T) -> Self {
        Self {
            record,
            events: Vec::new(),
        }
    }

    pub fn with_event(mut self, event: Option<CatalogEvent>) -> Self {
        self.events.extend(event);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discount_change_rule() {
        assert!(CatalogEvent::discount_change("f", "c", "s", 0.0, 30.0).is_some());
        assert!(CatalogEvent::discount_change("f", "c", "s", 10.0, 20.0).is_some());
        assert!(CatalogEvent::discount_change("f", "c", "s", 20.0, 20.0).is_none());
        assert!(CatalogEvent::discount_change("f", "c", "s", 20.0, 10.0).is_none());
        assert!(CatalogEvent::discount_change("f", "c", "s", 0.0, 0.0).is_none());
    }

    #[test]
    fn test_committed_collects_events() {
        let committed = Committed::new(1)
            .with_event(None)
            .with_event(Some(CatalogEvent::StoreCreated {
                store_id: "store-1".into(),
            }));
        assert_eq!(committed.events.len(), 1);
        assert_eq!(committed.events[0].name(), "store_created");
    }
}
