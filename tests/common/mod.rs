#![allow(dead_code)]

use std::{
    net::SocketAddr,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};

use async_trait::async_trait;
use axum::Router;
use chat_relay::{AppState, CompletionClient, ErrorMode, PromptMessage, Relay, RelayError, app};
use reqwest::StatusCode;

/// Serve `router` on an ephemeral local port and return its address.
pub async fn spawn(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("test server");
    });
    addr
}

pub async fn spawn_app(client: Arc<dyn CompletionClient>, mode: ErrorMode) -> SocketAddr {
    spawn(app(AppState::new(Relay::new(client), mode))).await
}

/// Always answers with the same text and counts calls.
pub struct StaticClient {
    pub reply: String,
    pub calls: AtomicUsize,
}

impl StaticClient {
    pub fn new(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: reply.to_string(),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompletionClient for StaticClient {
    async fn complete(&self, _prompt: &[PromptMessage]) -> Result<String, RelayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.reply.clone())
    }

    fn name(&self) -> &str {
        "static"
    }
}

/// Fails every call with an upstream error.
pub struct RejectingClient;

#[async_trait]
impl CompletionClient for RejectingClient {
    async fn complete(&self, _prompt: &[PromptMessage]) -> Result<String, RelayError> {
        Err(RelayError::Upstream {
            status: StatusCode::TOO_MANY_REQUESTS,
            message: "You exceeded your current quota".into(),
        })
    }

    fn name(&self) -> &str {
        "rejecting"
    }
}

/// Fails every call with a connection error against a closed local port.
pub struct UnreachableClient {
    url: String,
}

impl UnreachableClient {
    pub async fn new() -> Arc<Self> {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind probe listener");
        let addr = listener.local_addr().expect("local addr");
        drop(listener);
        Arc::new(Self {
            url: format!("http://{addr}/"),
        })
    }
}

#[async_trait]
impl CompletionClient for UnreachableClient {
    async fn complete(&self, _prompt: &[PromptMessage]) -> Result<String, RelayError> {
        reqwest::get(&self.url).await?;
        unreachable!("nothing listens on {}", self.url)
    }

    fn name(&self) -> &str {
        "unreachable"
    }
}
