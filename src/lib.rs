//! Web front end that relays chat messages to an OpenAI-compatible
//! completion API behind a fixed supportive-assistant system prompt.

pub mod appstate;
pub mod config;
pub mod error;
pub mod relay;
pub mod routes;
pub mod types;

use axum::Router;

pub use appstate::AppState;
pub use config::{Backend, Config, ConfigError, ErrorMode};
pub use error::ApiError;
pub use relay::{CompletionClient, Relay, RelayError};
pub use types::{ChatRequest, ChatResponse, ErrResp, PromptMessage, Role};

/// The full application router with state attached.
pub fn app(state: AppState) -> Router {
    routes::router().with_state(state)
}
