//! HTTP client for the chat server
//!
//! Requests run on a tokio runtime owned by the client; replies come back
//! to the UI thread through a channel and are collected once per frame with
//! `poll`.

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;

use shared::{ChatRequest, ChatResponse};

use crate::state::{OutgoingChat, PanelId};

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server returned status {0}")]
    Status(u16),
}

/// Outcome of one chat request, tagged with the panel that sent it
#[derive(Debug)]
pub struct ChatReply {
    pub panel_id: PanelId,
    /// Prompt as sent, kept for retry
    pub prompt: String,
    pub result: Result<String, ChatError>,
}

type RepaintHook = Arc<dyn Fn() + Send + Sync>;

pub struct ChatClient {
    runtime: tokio::runtime::Runtime,
    http: reqwest::Client,
    server_url: String,
    tx: Sender<ChatReply>,
    rx: Receiver<ChatReply>,
    repaint: Option<RepaintHook>,
}

impl ChatClient {
    pub fn new(server_url: impl Into<String>) -> Result<Self, ChatError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()?;
        let (tx, rx) = mpsc::channel();
        Ok(Self {
            runtime,
            http: reqwest::Client::new(),
            server_url: server_url.into(),
            tx,
            rx,
            repaint: None,
        })
    }

    /// Called after every reply so the UI wakes up
    pub fn with_repaint(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.repaint = Some(Arc::new(hook));
        self
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    pub fn set_server_url(&mut self, url: impl Into<String>) {
        self.server_url = url.into();
    }

    /// Fire a request in the background
    pub fn send(&self, chat: OutgoingChat) {
        let http = self.http.clone();
        let url = format!("{}/api/chat", self.server_url);
        let tx = self.tx.clone();
        let repaint = self.repaint.clone();

        tracing::debug!("Sending chat for {} to {url}", crate::state::short_id(&chat.panel_id));
        self.runtime.spawn(async move {
            let result = post_chat(&http, &url, &chat.prompt).await;
            let reply = ChatReply {
                panel_id: chat.panel_id,
                prompt: chat.prompt,
                result,
            };
            if tx.send(reply).is_err() {
                tracing::debug!("Chat client dropped before reply arrived");
            }
            if let Some(repaint) = repaint {
                repaint();
            }
        });
    }

    /// Drain replies that have arrived since the last call
    pub fn poll(&self) -> Vec<ChatReply> {
        self.rx.try_iter().collect()
    }
}

async fn post_chat(http: &reqwest::Client, url: &str, prompt: &str) -> Result<String, ChatError> {
    let response = http
        .post(url)
        .json(&ChatRequest {
            message: prompt.to_string(),
        })
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(ChatError::Status(status.as_u16()));
    }
    let body: ChatResponse = response.json().await?;
    Ok(body.text)
}
