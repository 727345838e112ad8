use anyhow::Context;
use std::{net::SocketAddr, sync::Arc};
use tokio::{net::TcpListener, signal};
use tracing::info;

use sports_store::{
    config::{load_config, ConfigSource, StorageBackend, StorageConfig},
    create_router,
    domain::ProductRepository,
    infrastructure::{init_logging, InMemoryProductRepository},
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (config, source) = load_config().context("加载配置失败")?;
    let _log_guard = init_logging(&config.logging)?;

    match &source {
        ConfigSource::File(path) => info!("从配置文件加载: {}", path.display()),
        ConfigSource::Defaults => info!("未找到配置文件，使用默认配置"),
    }

    let repository = build_repository(&config.storage).await?;
    let state = AppState::new(repository, config.catalog.page_size);
    let app = create_router(state, &config.server);

    let addr: SocketAddr = format!("{}:{}", config.server.bind_address, config.server.port)
        .parse()
        .context("无效的监听地址")?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("无法绑定到 {}", addr))?;

    info!("🚀 Sports Store 运行在 http://{}", addr);
    info!("   GET  /admin                     - 后台商品列表");
    info!("   GET  /products?category=&page=  - 商品目录");
    info!("   GET  /products/:id/image        - 商品图片");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("服务已停止");
    Ok(())
}

async fn build_repository(config: &StorageConfig) -> anyhow::Result<Arc<dyn ProductRepository>> {
    match config.backend {
        StorageBackend::Memory => {
            let repository = if config.seed_sample_data {
                InMemoryProductRepository::seeded()
            } else {
                InMemoryProductRepository::new()
            };
            info!(
                "使用内存存储，已有 {} 个商品",
                repository.products().await?.len()
            );
            Ok(Arc::new(repository))
        }
        #[cfg(feature = "database")]
        StorageBackend::Postgres => {
            use sports_store::infrastructure::database::{DatabaseManager, PgProductRepository};

            let manager = DatabaseManager::new(config).await.context("连接数据库失败")?;
            manager.migrate().await.context("创建商品表失败")?;
            info!("使用 PostgreSQL 存储");
            Ok(Arc::new(PgProductRepository::new(manager.get_pool().clone())))
        }
        #[cfg(not(feature = "database"))]
        StorageBackend::Postgres => {
            anyhow::bail!("PostgreSQL 存储需要启用 database feature")
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!("无法监听 Ctrl+C: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!("无法监听 SIGTERM: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("收到 Ctrl+C，开始优雅停机"),
        _ = terminate => info!("收到 SIGTERM，开始优雅停机"),
    }
}
