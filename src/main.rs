use std::sync::Arc;

use anyhow::Context;
use product_catalog::{
    app::product::{AppState, PgProductRepository},
    create_routes,
    infrastructure::{database::DatabaseManager, logger::Logger},
    Config,
};
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置
    let config = Config::load().context("failed to load configuration")?;

    // 初始化日志
    Logger::init(&config.logging);
    info!("Starting product catalog service...");

    // 初始化数据库
    let database = DatabaseManager::new(&config.database)
        .await
        .map_err(|e| {
            error!("Failed to initialize database: {}", e);
            e
        })
        .context("failed to connect to database")?;

    let repository = PgProductRepository::new(database.into_pool());
    let app = create_routes(AppState::new(Arc::new(repository)));

    // 启动服务器
    let listener = TcpListener::bind(config.listen_addr())
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr()))?;
    let addr = listener.local_addr()?;

    info!("Product service running on http://{}", addr);
    info!("   GET    /product?id=        - Get product by ID");
    info!("   GET    /products           - Search (name, category, min_price, max_price)");
    info!("   PUT    /product?id=        - Replace product");
    info!("   DELETE /product?id=        - Delete product");

    axum::serve(listener, app).await?;

    Ok(())
}
