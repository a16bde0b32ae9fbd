use flux_hooks_api::metrics::{describe_metrics, record_events_listed, record_webhook};
use metrics_exporter_prometheus::PrometheusBuilder;

// 全局 recorder 每个进程只能安装一次，所以该文件只有一个测试
#[test]
fn test_api_counters_reach_prometheus_exporter() {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .expect("Failed to install Prometheus recorder");
    describe_metrics();

    record_webhook("stored");
    record_webhook("duplicate");
    record_webhook("duplicate");
    record_events_listed();

    let rendered = handle.render();
    assert!(
        rendered.contains(r#"flux_hooks_webhooks_total{outcome="stored"} 1"#),
        "rendered: {rendered}"
    );
    assert!(
        rendered.contains(r#"flux_hooks_webhooks_total{outcome="duplicate"} 2"#),
        "rendered: {rendered}"
    );
    assert!(
        rendered.contains("flux_hooks_events_listed_total 1"),
        "rendered: {rendered}"
    );
    assert!(rendered.contains("# HELP flux_hooks_webhooks_total"));
}
