//! Catalog engine
//!
//! # 结构
//!
//! ```text
//! catalog/
//! ├── clock.rs       # 时间源 (SystemClock / ManualClock)
//! ├── pricing.rs     # 折后价计算
//! ├── activation.rs  # 有效期窗口判定
//! ├── query.rs       # 搜索 / 过滤 / 排序 / 分页
//! ├── filters.rs     # 列表接口查询参数
//! ├── events.rs      # 提交后事件
//! ├── store.rs       # CatalogStore 内存表与增删改
//! ├── integrity.rs   # 级联规则与一致性检查
//! ├── views.rs       # 读时关联 (名称、计数)
//! ├── seed.rs        # 演示数据
//! └── service.rs     # CatalogService (RwLock 包装 + 通知钩子)
//! ```

pub mod activation;
pub mod clock;
pub mod events;
pub mod filters;
pub mod integrity;
pub mod pricing;
pub mod query;
pub mod seed;
pub mod service;
pub mod store;
pub mod views;

pub use clock::{Clock, ManualClock, SystemClock};
pub use events::{CatalogEvent, Committed};
pub use filters::{
    CategoryFilter, CollectionFilter, FlyerFilter, NotificationFilter, StoreFilter, UserFilter,
};
pub use integrity::{IntegrityReport, IntegrityViolation};
pub use service::{CatalogService, CollectionRemoval, DashboardStats, MutationOutcome};
pub use store::CatalogStore;
pub use views::{AppUserView, CategoryView, CollectionView, FlyerView, StoreView};
