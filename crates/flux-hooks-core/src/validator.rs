//! Webhook 请求体校验与规范化
//!
//! 流程固定为：请求体解析 → 必填字段（按固定顺序，遇到第一个缺失即返回）
//! → action 枚举校验 → 全部字段转为字符串。无 I/O，无副作用。

use crate::error::ValidationError;
use crate::model::{Action, Event};
use serde_json::{Map, Value};

/// 必填字段，顺序即检查顺序
pub const REQUIRED_FIELDS: [&str; 6] = [
    "request_id",
    "author",
    "action",
    "from_branch",
    "to_branch",
    "timestamp",
];

/// 从原始请求体解析出 JSON 对象
///
/// 空 body、非法 JSON、非对象、空对象都视为 `MalformedPayload`。
pub fn parse_payload(body: &[u8]) -> Result<Map<String, Value>, ValidationError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(ValidationError::MalformedPayload);
    }

    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) if !map.is_empty() => Ok(map),
        _ => Err(ValidationError::MalformedPayload),
    }
}

/// 将单个字段值转为字符串；空值返回 None
///
/// null / false / 0 / "" / [] / {} 均视为缺失。
pub fn coerce_field(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::Bool(true) => Some("True".to_string()),
        Value::Number(n) => {
            if n.as_f64() == Some(0.0) {
                None
            } else {
                Some(n.to_string())
            }
        }
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Array(items) if items.is_empty() => None,
        Value::Object(map) if map.is_empty() => None,
        other => Some(other.to_string()),
    }
}

/// 校验原始请求体并构造 [`Event`]
pub fn validate_body(body: &[u8]) -> Result<Event, ValidationError> {
    let payload = parse_payload(body)?;
    validate_object(&payload)
}

/// 校验任意 JSON 值
pub fn validate(payload: &Value) -> Result<Event, ValidationError> {
    match payload {
        Value::Object(map) if !map.is_empty() => validate_object(map),
        _ => Err(ValidationError::MalformedPayload),
    }
}

fn validate_object(payload: &Map<String, Value>) -> Result<Event, ValidationError> {
    let mut coerced: [String; 6] = Default::default();
    for (slot, field) in coerced.iter_mut().zip(REQUIRED_FIELDS) {
        *slot = payload
            .get(field)
            .and_then(coerce_field)
            .ok_or(ValidationError::MissingField(field))?;
    }

    // action 必须是字符串且与枚举值完全一致
    let action = payload
        .get("action")
        .and_then(Value::as_str)
        .and_then(|s| s.parse::<Action>().ok())
        .ok_or(ValidationError::InvalidAction)?;

    let [request_id, author, _, from_branch, to_branch, timestamp] = coerced;
    Ok(Event {
        request_id,
        author,
        action,
        from_branch,
        to_branch,
        timestamp,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_payload() -> Value {
        json!({
            "request_id": "42",
            "author": "alice",
            "action": "PUSH",
            "from_branch": "dev",
            "to_branch": "main",
            "timestamp": "2024-01-01T00:00:00Z"
        })
    }

    #[test]
    fn test_validate_success() {
        let event = validate(&valid_payload()).unwrap();
        assert_eq!(event.request_id, "42");
        assert_eq!(event.author, "alice");
        assert_eq!(event.action, Action::Push);
        assert_eq!(event.from_branch, "dev");
        assert_eq!(event.to_branch, "main");
        assert_eq!(event.timestamp, "2024-01-01T00:00:00Z");
    }

    #[test]
    fn test_malformed_body() {
        assert_eq!(validate_body(b""), Err(ValidationError::MalformedPayload));
        assert_eq!(validate_body(b"  \n"), Err(ValidationError::MalformedPayload));
        assert_eq!(validate_body(b"not json"), Err(ValidationError::MalformedPayload));
        assert_eq!(validate_body(b"{}"), Err(ValidationError::MalformedPayload));
        assert_eq!(validate_body(b"[1, 2]"), Err(ValidationError::MalformedPayload));
        assert_eq!(validate_body(b"null"), Err(ValidationError::MalformedPayload));
        assert_eq!(validate(&json!("PUSH")), Err(ValidationError::MalformedPayload));
    }

    #[test]
    fn test_each_missing_field_is_reported() {
        for field in REQUIRED_FIELDS {
            let mut payload = valid_payload();
            payload.as_object_mut().unwrap().remove(field);
            assert_eq!(
                validate(&payload),
                Err(ValidationError::MissingField(field)),
                "field {field}"
            );
        }
    }

    #[test]
    fn test_falsy_values_count_as_missing() {
        for empty in [json!(""), json!(null), json!(0), json!(false), json!([]), json!({})] {
            let mut payload = valid_payload();
            payload["author"] = empty.clone();
            assert_eq!(
                validate(&payload),
                Err(ValidationError::MissingField("author")),
                "value {empty}"
            );
        }
    }

    #[test]
    fn test_first_missing_field_wins() {
        let payload = json!({ "action": "PUSH", "timestamp": "" });
        assert_eq!(
            validate(&payload),
            Err(ValidationError::MissingField("request_id"))
        );

        let payload = json!({ "request_id": "1", "author": "bob", "action": "BOGUS" });
        assert_eq!(
            validate(&payload),
            Err(ValidationError::MissingField("from_branch"))
        );
    }

    #[test]
    fn test_invalid_action() {
        for action in [json!("push"), json!("DEPLOY"), json!(" PUSH"), json!(1), json!(true)] {
            let mut payload = valid_payload();
            payload["action"] = action.clone();
            assert_eq!(
                validate(&payload),
                Err(ValidationError::InvalidAction),
                "action {action}"
            );
        }
    }

    #[test]
    fn test_non_string_values_are_coerced() {
        let mut payload = valid_payload();
        payload["request_id"] = json!(42);
        payload["author"] = json!(true);
        payload["timestamp"] = json!(1704067200.5);

        let event = validate(&payload).unwrap();
        assert_eq!(event.request_id, "42");
        assert_eq!(event.author, "True");
        assert_eq!(event.timestamp, "1704067200.5");
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let mut payload = valid_payload();
        payload["repository"] = json!("flux/hooks");
        assert!(validate(&payload).is_ok());
    }
}
