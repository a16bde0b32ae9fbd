use metrics::{counter, describe_counter};

/// 描述所有指标（由安装了 recorder 的进程调用一次）
pub fn describe_metrics() {
    describe_counter!(
        "flux_hooks_webhooks_total",
        "Webhook deliveries by outcome (stored, duplicate, rejected, failed)"
    );
    describe_counter!(
        "flux_hooks_events_listed_total",
        "Number of event listing requests served"
    );
}

/// 记录 webhook 处理结果
pub fn record_webhook(outcome: &'static str) {
    counter!("flux_hooks_webhooks_total", "outcome" => outcome).increment(1);
}

/// 记录事件列表查询
pub fn record_events_listed() {
    counter!("flux_hooks_events_listed_total").increment(1);
}
