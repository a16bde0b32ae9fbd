use axum::response::Html;

const INDEX_HTML: &str = include_str!("../../assets/index.html");

/// 事件展示页面，页面自身轮询 /events
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
