//! 服务器状态
//!
//! 所有 handler 共享的 `ServerState`，克隆开销很小 (内部均为 Arc)。

use std::sync::Arc;

use crate::catalog::{CatalogService, CatalogStore, Clock, SystemClock, seed};
use crate::core::Config;
use crate::notifications::{AudienceResolver, NotificationEngine};

#[derive(Debug, Clone)]
pub struct ServerState {
    pub config: Config,
    pub catalog: CatalogService,
}

impl ServerState {
    pub fn new(config: Config, catalog: CatalogService) -> Self {
        Self { config, catalog }
    }

    /// 使用系统时钟和默认的关注者估算初始化
    pub fn initialize(config: &Config) -> Self {
        Self::with_parts(config, Arc::new(SystemClock), AudienceResolver::default())
    }

    /// 注入时钟与受众解析器 (测试用)
    pub fn with_parts(config: &Config, clock: Arc<dyn Clock>, resolver: AudienceResolver) -> Self {
        let mut store = CatalogStore::new(clock);
        if config.seed_demo_data {
            seed::seed_demo_data(&mut store);
        }

        let catalog = CatalogService::new(store, NotificationEngine::new(resolver))
            .with_auto_notifications(config.auto_notifications);

        tracing::info!(
            seed_demo_data = config.seed_demo_data,
            auto_notifications = config.auto_notifications,
            "Server state initialized"
        );
        Self::new(config.clone(), catalog)
    }
}
