pub mod chat;
pub mod resources;

use axum::{
    Router,
    routing::{get, post},
};

use crate::appstate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/chat", post(chat::chat_handler))
        .route("/resources", get(resources::list_resources))
        .route("/resources/{id}", get(resources::get_resource))
}
