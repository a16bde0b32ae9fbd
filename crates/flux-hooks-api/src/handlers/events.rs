use crate::{error::Result, metrics, state::AppState};
use axum::{extract::State, Json};
use flux_hooks_core::Event;
use tracing::debug;

/// 列出全部事件（最新在前）
pub async fn list_events(State(state): State<AppState>) -> Result<Json<Vec<Event>>> {
    let events = state.store.list_all().await?;
    debug!(count = events.len(), "Listing events");
    metrics::record_events_listed();
    Ok(Json(events))
}
