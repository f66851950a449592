use tecnoplant_admin::{router, AppConfig, Services};
use tracing::info;
use tracing_subscriber::fmt::time::ChronoLocal;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 初始化日志 - 本地时间格式
    tracing_subscriber::fmt()
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()))
        .with_target(true)
        .with_level(true)
        .init();

    // 加载配置 (凭证只来自环境变量)
    let config = AppConfig::from_env()?;
    info!("Starting server with config: {:?}", config);

    let services = Services::from_config(&config)?;
    info!("Upstream orders endpoint: {}", config.upstream.orders_url);

    let app = router(services);

    // 启动服务器
    let addr = format!("{}:{}", config.server.host, config.server.port);
    info!("Server listening on {}", addr);
    info!("API Endpoints:");
    info!("  GET  /api/orders          - upstream pass-through");
    info!("  GET  /api/orders/view     - filtered and sorted orders");
    info!("  GET  /api/orders/export   - CSV export");
    info!("  GET  /api/clients         - client directory");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
