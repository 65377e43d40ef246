use axum::{
    Router,
    http::header,
    response::{Html, IntoResponse},
    routing::get,
};

use crate::appstate::AppState;

const INDEX_HTML: &str = include_str!("../../templates/index.html");
const RESOURCES_HTML: &str = include_str!("../../templates/resources.html");
const SCRIPT_JS: &str = include_str!("../../static/js/script.js");

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/resources", get(resources))
        .route("/static/js/script.js", get(script))
}

pub async fn home() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn resources() -> Html<&'static str> {
    Html(RESOURCES_HTML)
}

pub async fn script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        SCRIPT_JS,
    )
}
