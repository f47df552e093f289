use admin_server::{Config, Server, setup_environment};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. 加载 .env 和配置
    dotenv::dotenv().ok();
    let config = Config::from_env();

    // 2. 初始化日志
    setup_environment(&config);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        port = config.http_port,
        "Deals admin server starting..."
    );

    // 3. 启动 HTTP 服务器 (状态在 run 中初始化)
    let server = Server::new(config);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
