//! Notifications
//!
//! - [`engine`] - auto-notifications synthesized from catalog events
//! - [`lifecycle`] - admin-authored notifications and their state machine
//! - [`audience`] - target audience sizing

pub mod audience;
pub mod engine;
pub mod lifecycle;

pub use audience::{AudienceResolver, FixedFollowerEstimate, FollowerEstimator, RandomFollowerEstimate};
pub use engine::{AUTO_READ_RATE, DeliveryMetrics, MANUAL_READ_RATE, NotificationEngine};
