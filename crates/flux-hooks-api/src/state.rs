use flux_hooks_core::EventStore;
use std::sync::Arc;

/// API 应用状态
#[derive(Clone)]
pub struct AppState {
    /// 事件存储，由进程启动时注入
    pub store: Arc<dyn EventStore>,
}

impl AppState {
    /// 创建新的应用状态
    pub fn new(store: Arc<dyn EventStore>) -> Self {
        Self { store }
    }
}
