use tokio::signal;
use tracing::info;

/// 等待 SIGINT / SIGTERM，用于 axum 优雅关闭
#[cfg(unix)]
pub async fn shutdown_signal() {
    use signal::unix::{signal, SignalKind};

    let mut sigterm = match signal(SignalKind::terminate()) {
        Ok(s) => s,
        Err(e) => {
            tracing::warn!("Failed to install SIGTERM handler: {}", e);
            return wait_for_ctrl_c().await;
        }
    };

    tokio::select! {
        _ = sigterm.recv() => info!("Received SIGTERM"),
        _ = signal::ctrl_c() => info!("Received SIGINT"),
    }
}

/// 等待 Ctrl+C（Windows 版本）
#[cfg(not(unix))]
pub async fn shutdown_signal() {
    wait_for_ctrl_c().await
}

async fn wait_for_ctrl_c() {
    match signal::ctrl_c().await {
        Ok(()) => info!("Received Ctrl+C"),
        Err(e) => {
            // 无法监听信号时永不返回，服务持续运行直到进程被杀
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await
        }
    }
}
