use crate::{error::Result, metrics, models::WebhookResponse, state::AppState};
use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    Json,
};
use flux_hooks_core::{validator, InsertOutcome, ValidationError};
use tracing::{info, warn};

/// 接收 webhook 事件
///
/// 请求体不做类型假设，交给校验器解析和规范化；
/// Content-Type 不是 JSON 时与空请求体同样处理。
pub async fn receive_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<WebhookResponse>)> {
    let validated = if is_json_content_type(&headers) {
        validator::validate_body(&body)
    } else {
        Err(ValidationError::MalformedPayload)
    };

    let event = match validated {
        Ok(event) => event,
        Err(e) => {
            warn!(reason = %e, "Webhook rejected");
            metrics::record_webhook("rejected");
            return Err(e.into());
        }
    };

    info!(
        request_id = %event.request_id,
        action = %event.action,
        author = %event.author,
        "Webhook received"
    );

    let outcome = match state.store.insert(event).await {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::error!(error = %e, "Failed to store webhook event");
            metrics::record_webhook("failed");
            return Err(e.into());
        }
    };

    let status = match outcome {
        InsertOutcome::Stored => {
            metrics::record_webhook("stored");
            StatusCode::CREATED
        }
        InsertOutcome::DuplicateSkipped => {
            metrics::record_webhook("duplicate");
            StatusCode::OK
        }
    };

    Ok((status, Json(WebhookResponse::from(outcome))))
}

/// application/json 或 application/*+json
fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(value) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    else {
        return false;
    };

    let mime = value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(content_type: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_str(content_type).unwrap());
        headers
    }

    #[test]
    fn test_json_content_types() {
        assert!(is_json_content_type(&headers("application/json")));
        assert!(is_json_content_type(&headers("application/json; charset=utf-8")));
        assert!(is_json_content_type(&headers("Application/JSON")));
        assert!(is_json_content_type(&headers("application/vnd.github+json")));
    }

    #[test]
    fn test_non_json_content_types() {
        assert!(!is_json_content_type(&HeaderMap::new()));
        assert!(!is_json_content_type(&headers("text/plain")));
        assert!(!is_json_content_type(&headers("application/x-www-form-urlencoded")));
    }
}
