use clap::Parser;
use flux_hooks_server::{build_store, connect_database, serve, AppConfig, StoreBackend};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_CONFIG: &str = "config.toml";

#[derive(Parser, Debug)]
#[command(author, version, about = "Source-control webhook receiver", long_about = None)]
struct Args {
    /// Config file path (defaults to ./config.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override database.url from the config file
    #[arg(long)]
    database_url: Option<String>,

    /// Keep events in memory instead of the database
    #[arg(long)]
    in_memory: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 显式指定的配置文件必须存在
    let required = args.config.is_some();
    let config_path = args.config.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG));
    let mut config = AppConfig::load(&config_path, required)?;
    if let Some(url) = args.database_url {
        config.database.url = url;
    }

    // 初始化日志，RUST_LOG 优先于配置文件
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting flux-hooks with config: {}", config_path.display());

    if config.metrics.enabled {
        flux_hooks_server::metrics::init_metrics(config.metrics_addr()?)?;
    }

    let backend = if args.in_memory {
        StoreBackend::Memory
    } else {
        StoreBackend::Database(Arc::new(connect_database(&config.database).await?))
    };
    let store = build_store(&backend);

    serve(&config, store).await?;

    if let StoreBackend::Database(db) = backend {
        match Arc::try_unwrap(db) {
            Ok(db) => db.close().await?,
            Err(_) => tracing::warn!("Database connection still shared at shutdown"),
        }
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
