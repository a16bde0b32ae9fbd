use flux_hooks_core::InsertOutcome;
use serde::Serialize;

/// webhook 写入响应
#[derive(Debug, Serialize)]
pub struct WebhookResponse {
    pub status: &'static str,
    pub message: &'static str,
}

impl From<InsertOutcome> for WebhookResponse {
    fn from(outcome: InsertOutcome) -> Self {
        match outcome {
            InsertOutcome::Stored => Self {
                status: "success",
                message: "Event stored successfully",
            },
            InsertOutcome::DuplicateSkipped => Self {
                status: "duplicate",
                message: "Event already exists, skipped",
            },
        }
    }
}
