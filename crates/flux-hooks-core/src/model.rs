use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 源码管理动作类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    Push,
    PullRequest,
    Merge,
}

impl Action {
    /// 所有允许的动作（校验顺序即错误信息中的顺序）
    pub const ALL: [Action; 3] = [Action::Push, Action::PullRequest, Action::Merge];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Push => "PUSH",
            Action::PullRequest => "PULL_REQUEST",
            Action::Merge => "MERGE",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 严格匹配，大小写敏感
impl FromStr for Action {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .iter()
            .copied()
            .find(|action| action.as_str() == s)
            .ok_or(())
    }
}

/// 规范化后的 webhook 事件
///
/// 只能通过 [`crate::validator::validate`] 构造出合法实例；
/// 入库后不可变，不会被更新或删除。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub request_id: String,
    pub author: String,
    pub action: Action,
    pub from_branch: String,
    pub to_branch: String,
    /// 调用方提供的时间，原样保存，不做解析
    pub timestamp: String,
}

impl Event {
    /// 去重键 (request_id, action)
    pub fn dedup_key(&self) -> (&str, Action) {
        (&self.request_id, self.action)
    }
}

/// 写入结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// 新事件已写入
    Stored,
    /// (request_id, action) 已存在，未写入
    DuplicateSkipped,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_wire_names() {
        assert_eq!(serde_json::to_value(Action::PullRequest).unwrap(), "PULL_REQUEST");
        assert_eq!("MERGE".parse::<Action>(), Ok(Action::Merge));
        assert!("push".parse::<Action>().is_err());
        assert!("Pull_Request".parse::<Action>().is_err());
    }

    #[test]
    fn test_event_json_has_only_six_fields() {
        let event = Event {
            request_id: "42".to_string(),
            author: "alice".to_string(),
            action: Action::Push,
            from_branch: "dev".to_string(),
            to_branch: "main".to_string(),
            timestamp: "2024-01-01T00:00:00Z".to_string(),
        };

        let value = serde_json::to_value(&event).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 6);
        assert_eq!(obj["action"], "PUSH");
        assert!(obj.get("id").is_none());
    }
}
