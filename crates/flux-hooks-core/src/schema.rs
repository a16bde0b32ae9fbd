use crate::error::Result;
use sea_orm::{ConnectionTrait, DatabaseConnection, DbBackend, Statement};

/// 去重键上的唯一索引名
pub const DEDUP_INDEX: &str = "idx_events_request_action";

/// 创建 events 表及 (request_id, action) 唯一索引（幂等）
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<()> {
    let backend = db.get_database_backend();

    let create_table = match backend {
        DbBackend::Sqlite => {
            "CREATE TABLE IF NOT EXISTS events (\
                id INTEGER PRIMARY KEY AUTOINCREMENT,\
                request_id TEXT NOT NULL,\
                author TEXT NOT NULL,\
                action TEXT NOT NULL,\
                from_branch TEXT NOT NULL,\
                to_branch TEXT NOT NULL,\
                timestamp TEXT NOT NULL\
            )"
        }
        DbBackend::Postgres => {
            "CREATE TABLE IF NOT EXISTS events (\
                id BIGSERIAL PRIMARY KEY,\
                request_id TEXT NOT NULL,\
                author TEXT NOT NULL,\
                action TEXT NOT NULL,\
                from_branch TEXT NOT NULL,\
                to_branch TEXT NOT NULL,\
                timestamp TEXT NOT NULL\
            )"
        }
        DbBackend::MySql => {
            "CREATE TABLE IF NOT EXISTS events (\
                id BIGINT PRIMARY KEY AUTO_INCREMENT,\
                request_id VARCHAR(255) NOT NULL,\
                author VARCHAR(255) NOT NULL,\
                action VARCHAR(32) NOT NULL,\
                from_branch VARCHAR(255) NOT NULL,\
                to_branch VARCHAR(255) NOT NULL,\
                timestamp VARCHAR(64) NOT NULL,\
                UNIQUE KEY idx_events_request_action (request_id, action)\
            )"
        }
    };
    db.execute(Statement::from_string(backend, create_table.to_string()))
        .await?;

    // MySQL 不支持 CREATE INDEX IF NOT EXISTS，唯一约束已在建表语句中声明
    if backend != DbBackend::MySql {
        let create_index = format!(
            "CREATE UNIQUE INDEX IF NOT EXISTS {} ON events (request_id, action)",
            DEDUP_INDEX
        );
        db.execute(Statement::from_string(backend, create_index))
            .await?;
    }

    tracing::info!(backend = ?backend, "Event schema ready");
    Ok(())
}
