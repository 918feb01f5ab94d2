use axum::response::Html;
use axum::routing::get;
use axum::Router;

pub fn create_route() -> Router {
    Router::new().route("/ui", get(upload_page))
}

pub async fn upload_page() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}
