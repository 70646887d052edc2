use axum::{extract::State, response::Json};
use serde_json::{json, Value};

use crate::ai;
use crate::AppState;
use shared::{ChatRequest, ChatResponse};

pub const EMPTY_MESSAGE_TEXT: &str = "Please provide a message.";

/// Health check
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Chat endpoint
///
/// Always answers 200 with displayable text; upstream failures become an
/// apologetic reply instead of an HTTP error.
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let prompt = request.message.trim();
    if prompt.is_empty() {
        return Json(ChatResponse {
            text: EMPTY_MESSAGE_TEXT.to_string(),
        });
    }

    let text = match ai::ask_model(&state, prompt).await {
        Ok(text) => text,
        Err(e) => {
            tracing::error!("Chat request failed: {e}");
            format!("Sorry, there was an issue: {e}")
        }
    };
    Json(ChatResponse { text })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ServerConfig;

    fn state_without_key() -> AppState {
        AppState::new(ServerConfig::from_lookup(|_| None))
    }

    #[tokio::test]
    async fn test_health() {
        let Json(body) = health().await;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_blank_message_short_circuits() {
        let Json(resp) = chat(
            State(state_without_key()),
            Json(ChatRequest { message: "   ".into() }),
        )
        .await;
        assert_eq!(resp.text, EMPTY_MESSAGE_TEXT);
    }

    #[tokio::test]
    async fn test_missing_key_becomes_reply() {
        let Json(resp) = chat(
            State(state_without_key()),
            Json(ChatRequest { message: "Summarise sales.csv".into() }),
        )
        .await;
        assert_eq!(resp.text, "Sorry, there was an issue: ANTHROPIC_API_KEY not set");
    }
}
