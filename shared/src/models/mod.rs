//! Data models
//!
//! Shared between admin-server and the dashboard (via API).
//! All IDs are opaque strings; all timestamps are Unix millis.
//! JSON field names are camelCase because the dashboard reads them verbatim.

pub mod app_user;
pub mod category;
pub mod collection;
pub mod common;
pub mod flyer;
pub mod notification;
pub mod store;

// Re-exports
pub use app_user::*;
pub use category::*;
pub use collection::*;
pub use common::*;
pub use flyer::*;
pub use notification::*;
pub use store::*;
