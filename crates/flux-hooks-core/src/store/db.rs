use super::EventStore;
use crate::entity::events;
use crate::error::{HookError, Result};
use crate::model::{Action, Event, InsertOutcome};
use async_trait::async_trait;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, SqlErr,
};
use std::sync::Arc;
use tracing::{debug, info};

/// 基于 sea-orm 的事件存储（SQLite / Postgres）
///
/// 写入前先查询去重键；表上的唯一索引兜底并发写入时的竞争，
/// 插入触发唯一约束冲突同样按重复处理。
pub struct DbEventStore {
    db: Arc<DatabaseConnection>,
}

impl DbEventStore {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn exists(&self, request_id: &str, action: Action) -> Result<bool> {
        let found = events::Entity::find()
            .filter(events::Column::RequestId.eq(request_id))
            .filter(events::Column::Action.eq(action.as_str()))
            .one(&*self.db)
            .await?;
        Ok(found.is_some())
    }

    /// 直接写入；唯一索引冲突（并发写入同一去重键）按重复处理
    async fn insert_row(&self, event: Event) -> Result<InsertOutcome> {
        let request_id = event.request_id.clone();
        let action = event.action;
        let active_model: events::ActiveModel = event.into();
        match events::Entity::insert(active_model).exec(&*self.db).await {
            Ok(res) => {
                info!(request_id = %request_id, action = %action, seq = res.last_insert_id, "Event stored");
                Ok(InsertOutcome::Stored)
            }
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                debug!(request_id = %request_id, action = %action, "Concurrent duplicate rejected by unique index");
                Ok(InsertOutcome::DuplicateSkipped)
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait]
impl EventStore for DbEventStore {
    async fn insert(&self, event: Event) -> Result<InsertOutcome> {
        let (request_id, action) = event.dedup_key();
        if self.exists(request_id, action).await? {
            debug!(request_id = %request_id, action = %action, "Duplicate event skipped");
            return Ok(InsertOutcome::DuplicateSkipped);
        }

        self.insert_row(event).await
    }

    async fn list_all(&self) -> Result<Vec<Event>> {
        let rows = events::Entity::find()
            .order_by_desc(events::Column::Id)
            .all(&*self.db)
            .await?;

        rows.into_iter().map(Event::try_from).collect()
    }

    async fn count(&self) -> Result<u64> {
        Ok(events::Entity::find().count(&*self.db).await?)
    }
}

impl From<Event> for events::ActiveModel {
    fn from(event: Event) -> Self {
        Self {
            id: NotSet,
            request_id: Set(event.request_id),
            author: Set(event.author),
            action: Set(event.action.as_str().to_string()),
            from_branch: Set(event.from_branch),
            to_branch: Set(event.to_branch),
            timestamp: Set(event.timestamp),
        }
    }
}

impl TryFrom<events::Model> for Event {
    type Error = HookError;

    fn try_from(model: events::Model) -> Result<Self> {
        let action = model.action.parse::<Action>().map_err(|_| {
            HookError::Internal(format!(
                "event {} has unknown action {:?}",
                model.id, model.action
            ))
        })?;

        Ok(Self {
            request_id: model.request_id,
            author: model.author,
            action,
            from_branch: model.from_branch,
            to_branch: model.to_branch,
            timestamp: model.timestamp,
        })
    }
}
