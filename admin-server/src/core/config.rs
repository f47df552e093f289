/// 服务器配置
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 默认日志级别 (RUST_LOG 优先) |
/// | LOG_DIR | - | 设置后按天滚动写入日志文件 |
/// | LOG_JSON | false | JSON 格式日志 |
/// | SEED_DEMO_DATA | true | 启动时加载演示数据 |
/// | AUTO_NOTIFICATIONS | true | 目录变更自动生成通知 |
///
/// # 示例
///
/// ```ignore
/// HTTP_PORT=8080 SEED_DEMO_DATA=false cargo run -p admin-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 运行环境: development | production
    pub environment: String,
    /// 默认日志级别
    pub log_level: String,
    /// 日志文件目录 (None 仅输出到 stdout)
    pub log_dir: Option<String>,
    /// JSON 格式日志
    pub log_json: bool,
    /// 启动时加载演示数据
    pub seed_demo_data: bool,
    /// 是否启用自动通知
    pub auto_notifications: bool,
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            http_port: env_parse("HTTP_PORT", 3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            log_json: env_parse("LOG_JSON", false),
            seed_demo_data: env_parse("SEED_DEMO_DATA", true),
            auto_notifications: env_parse("AUTO_NOTIFICATIONS", true),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(http_port: u16, seed_demo_data: bool, auto_notifications: bool) -> Self {
        let mut config = Self::from_env();
        config.http_port = http_port;
        config.seed_demo_data = seed_demo_data;
        config.auto_notifications = auto_notifications;
        config
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides() {
        let config = Config::with_overrides(0, false, false);
        assert_eq!(config.http_port, 0);
        assert!(!config.seed_demo_data);
        assert!(!config.auto_notifications);
    }

    #[test]
    fn test_env_parse_falls_back_on_garbage() {
        assert_eq!(env_parse("ADMIN_SERVER_TEST_UNSET_VARIABLE", 42u16), 42);
    }
}
