//! Shared types for the deals admin backend
//!
//! Entity models, the unified error system and response envelope, and
//! pagination types used by the admin server and its clients.

pub mod error;
pub mod models;
pub mod query;
pub mod util;

// Re-exports
pub use axum::Json;
pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode, ErrorKind};
pub use http;
pub use query::{Page, PageParams};
pub use serde::{Deserialize, Serialize};
