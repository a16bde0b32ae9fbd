pub mod config;
pub mod metrics;
pub mod shutdown;

use anyhow::Result;
use flux_hooks_api::{create_router, AppState};
use flux_hooks_core::{ensure_schema, DbEventStore, EventStore, MemoryEventStore};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;
use std::time::Duration;

pub use config::AppConfig;

/// 事件存储后端
pub enum StoreBackend {
    Database(Arc<DatabaseConnection>),
    Memory,
}

/// 连接数据库并确保表结构存在
pub async fn connect_database(config: &config::DatabaseConfig) -> Result<DatabaseConnection> {
    let mut options = ConnectOptions::new(config.url.clone());
    options
        .max_connections(config.max_connections)
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .sqlx_logging(false);

    let db = Database::connect(options).await?;
    ensure_schema(&db).await?;
    tracing::info!(max_connections = config.max_connections, "Database connected");
    Ok(db)
}

/// 根据后端构造事件存储
pub fn build_store(backend: &StoreBackend) -> Arc<dyn EventStore> {
    match backend {
        StoreBackend::Database(db) => Arc::new(DbEventStore::new(db.clone())),
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory event store, events are lost on exit");
            Arc::new(MemoryEventStore::new())
        }
    }
}

/// 启动 HTTP 服务，直到收到关闭信号
pub async fn serve(config: &AppConfig, store: Arc<dyn EventStore>) -> Result<()> {
    let addr = config.listen_addr()?;
    let app = create_router(AppState::new(store));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown::shutdown_signal())
        .await?;

    tracing::info!("HTTP server stopped");
    Ok(())
}
