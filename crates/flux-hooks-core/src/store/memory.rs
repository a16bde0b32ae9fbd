use super::EventStore;
use crate::error::Result;
use crate::model::{Event, InsertOutcome};
use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// 内存事件存储
///
/// 检查与写入在同一把写锁内完成，不存在竞争窗口。进程退出即丢失数据。
#[derive(Default)]
pub struct MemoryEventStore {
    /// 按写入顺序保存
    events: RwLock<Vec<Event>>,
}

impl MemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EventStore for MemoryEventStore {
    async fn insert(&self, event: Event) -> Result<InsertOutcome> {
        let mut events = self.events.write().await;

        if events.iter().any(|e| e.dedup_key() == event.dedup_key()) {
            debug!(request_id = %event.request_id, action = %event.action, "Duplicate event skipped");
            return Ok(InsertOutcome::DuplicateSkipped);
        }

        info!(request_id = %event.request_id, action = %event.action, "Event stored");
        events.push(event);
        Ok(InsertOutcome::Stored)
    }

    async fn list_all(&self) -> Result<Vec<Event>> {
        let events = self.events.read().await;
        Ok(events.iter().rev().cloned().collect())
    }

    async fn count(&self) -> Result<u64> {
        Ok(self.events.read().await.len() as u64)
    }
}
