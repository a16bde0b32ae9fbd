use crate::error::Result;
use crate::model::{Event, InsertOutcome};
use async_trait::async_trait;

pub mod db;
pub mod memory;

pub use db::DbEventStore;
pub use memory::MemoryEventStore;

/// 事件存储
///
/// 唯一可变操作是追加写入；写入前按 (request_id, action) 去重。
#[async_trait]
pub trait EventStore: Send + Sync {
    /// 写入事件；去重键已存在时跳过，不修改存储
    async fn insert(&self, event: Event) -> Result<InsertOutcome>;

    /// 返回全部事件，按写入顺序倒序（最新在前）
    async fn list_all(&self) -> Result<Vec<Event>>;

    /// 已存储事件数
    async fn count(&self) -> Result<u64>;
}
