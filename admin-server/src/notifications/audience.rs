//! TargetAudienceResolver
//!
//! Turns a notification target into the number of users it reaches, which
//! drives the simulated delivery metrics.
//!
//! There is no follow relationship in the catalog, so `STORE_FOLLOWERS` is a
//! placeholder estimate supplied by a [`FollowerEstimator`]. The default
//! estimator draws a random number; it is not business data.

use std::sync::Arc;

use rand::Rng;
use shared::models::NotificationTarget;

use crate::catalog::CatalogStore;
use crate::utils::{AppError, AppResult, ErrorCode};

/// Placeholder for "how many users follow this store"
pub trait FollowerEstimator: Send + Sync + std::fmt::Debug {
    fn estimate(&self, store_id: &str, user_count: u32) -> u32;
}

/// Uniform random draw in `0..=user_count`
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomFollowerEstimate;

impl FollowerEstimator for RandomFollowerEstimate {
    fn estimate(&self, _store_id: &str, user_count: u32) -> u32 {
        rand::thread_rng().gen_range(0..=user_count)
    }
}

/// Always the same number (tests)
#[derive(Debug, Clone, Copy)]
pub struct FixedFollowerEstimate(pub u32);

impl FollowerEstimator for FixedFollowerEstimate {
    fn estimate(&self, _store_id: &str, _user_count: u32) -> u32 {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct AudienceResolver {
    followers: Arc<dyn FollowerEstimator>,
}

impl Default for AudienceResolver {
    fn default() -> Self {
        Self::new(Arc::new(RandomFollowerEstimate))
    }
}

impl AudienceResolver {
    pub fn new(followers: Arc<dyn FollowerEstimator>) -> Self {
        Self { followers }
    }

    /// Number of users `target` reaches right now
    pub fn resolve(&self, store: &CatalogStore, target: &NotificationTarget) -> AppResult<u32> {
        let user_count = store.user_count() as u32;
        match target {
            NotificationTarget::AllUsers => Ok(user_count),
            // ids are not checked against the user table
            NotificationTarget::CustomUsers { user_ids } => Ok(user_ids.len() as u32),
            NotificationTarget::StoreFollowers { store_id } => {
                if store.get_store(store_id).is_err() {
                    return Err(AppError::with_message(
                        ErrorCode::AudienceUnresolved,
                        format!("Cannot resolve followers of unknown store {store_id}"),
                    )
                    .with_detail("storeId", store_id.as_str()));
                }
                Ok(self.followers.estimate(store_id, user_count))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::AppUserCreate;

    fn store_with_users(n: usize) -> CatalogStore {
        let mut store = CatalogStore::default();
        for i in 0..n {
            store
                .create_user(AppUserCreate {
                    email: format!("user{i}@example.com"),
                    name: format!("User {i}"),
                    ..Default::default()
                })
                .unwrap();
        }
        store
    }

    #[test]
    fn test_all_users_counts_users() {
        let store = store_with_users(3);
        let resolver = AudienceResolver::default();
        assert_eq!(resolver.resolve(&store, &NotificationTarget::AllUsers).unwrap(), 3);
    }

    #[test]
    fn test_custom_users_counts_ids_without_lookup() {
        let store = store_with_users(1);
        let resolver = AudienceResolver::default();
        let target = NotificationTarget::CustomUsers {
            user_ids: vec!["user-a".into(), "user-b".into()],
        };
        assert_eq!(resolver.resolve(&store, &target).unwrap(), 2);
    }

    #[test]
    fn test_followers_of_unknown_store_fail() {
        let store = store_with_users(1);
        let resolver = AudienceResolver::new(Arc::new(FixedFollowerEstimate(7)));
        let err = resolver
            .resolve(
                &store,
                &NotificationTarget::StoreFollowers {
                    store_id: "store-x".into(),
                },
            )
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::AudienceUnresolved);
    }

    #[test]
    fn test_random_estimate_stays_in_range() {
        let estimator = RandomFollowerEstimate;
        for _ in 0..50 {
            assert!(estimator.estimate("store-1", 10) <= 10);
        }
        assert_eq!(estimator.estimate("store-1", 0), 0);
    }
}
