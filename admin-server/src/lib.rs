//! Deals Admin Server - 优惠传单管理后台
//!
//! # 架构概述
//!
//! 单进程内存目录引擎 + axum HTTP API：
//!
//! - **目录** (`catalog`): 分类、门店、目录册、传单、用户与通知的内存表，
//!   引用完整性规则、查询引擎与读时关联
//! - **通知** (`notifications`): 自动通知、手动通知生命周期、受众解析
//! - **HTTP API** (`api`): RESTful 接口，统一 `{ status, message, data }` 响应
//!
//! # 模块结构
//!
//! ```text
//! admin-server/src/
//! ├── core/           # 配置、状态、错误、服务器
//! ├── catalog/        # 内存目录引擎
//! ├── notifications/  # 通知引擎
//! ├── api/            # HTTP 路由和处理器
//! ├── routes/         # 路由组装与中间件
//! └── utils/          # 工具函数
//! ```

pub mod api;
pub mod catalog;
pub mod core;
pub mod notifications;
pub mod routes;
pub mod utils;

// Re-export 公共类型
pub use catalog::{CatalogService, CatalogStore};
pub use core::{Config, Server, ServerState};
pub use notifications::{AudienceResolver, NotificationEngine};
pub use utils::{AppError, AppResult};

// Re-export unified error types from shared
pub use utils::{ApiResponse, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// 按配置初始化日志 (级别、JSON 格式、可选文件输出)
pub fn setup_environment(config: &Config) {
    init_logger_with_file(
        Some(&config.log_level),
        config.log_json,
        config.log_dir.as_deref(),
    );
}
