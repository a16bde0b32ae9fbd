//! Flux Hooks 核心：webhook 事件模型、请求体校验、去重事件存储。
//!
//! 数据流：原始请求体 → [`validator`] → [`Event`] → [`EventStore::insert`]。
//! HTTP 与进程生命周期不在本 crate 内。

pub mod entity;
pub mod error;
pub mod model;
pub mod schema;
pub mod store;
pub mod validator;

pub use error::{HookError, Result, ValidationError};
pub use model::{Action, Event, InsertOutcome};
pub use schema::ensure_schema;
pub use store::{DbEventStore, EventStore, MemoryEventStore};
pub use validator::{validate, validate_body};
