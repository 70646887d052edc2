use thiserror::Error;

use crate::AppState;

const SYSTEM_PROMPT: &str = r#"
You are a friendly and helpful data analysis assistant.

Users talk to you from a whiteboard where they upload spreadsheets, documents
and images. Their message may end with a bracketed note listing attached
files, for example "[2 other file(s) attached: sales.csv, q3.xlsx]". You cannot
open the files; reason from their names and types, and ask for the details
you need.
"#;

pub const NO_RESPONSE_TEXT: &str = "I'm sorry, I couldn't generate a response for that.";

/// Errors from the upstream model call
#[derive(Debug, Error)]
pub enum AiError {
    #[error("ANTHROPIC_API_KEY not set")]
    MissingApiKey,

    #[error("request to model failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("model API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("malformed model response: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Forward a prompt to the hosted model and return its reply text
pub async fn ask_model(state: &AppState, prompt: &str) -> Result<String, AiError> {
    let api_key = state
        .config
        .ai_api_key
        .as_ref()
        .ok_or(AiError::MissingApiKey)?;

    let response = state
        .http
        .post(&state.config.api_url)
        .header("x-api-key", api_key)
        .header("anthropic-version", "2023-06-01")
        .header("content-type", "application/json")
        .json(&serde_json::json!({
            "model": state.config.model,
            "max_tokens": 1024,
            "system": SYSTEM_PROMPT,
            "messages": [
                { "role": "user", "content": prompt }
            ]
        }))
        .send()
        .await?;

    let status = response.status();
    let text = response.text().await?;

    if !status.is_success() {
        return Err(api_error(status.as_u16(), &text));
    }

    let body: serde_json::Value = serde_json::from_str(&text)?;
    Ok(extract_reply_text(&body).unwrap_or_else(|| NO_RESPONSE_TEXT.to_string()))
}

/// Concatenate the text blocks of a Messages API response
pub fn extract_reply_text(body: &serde_json::Value) -> Option<String> {
    let text: Vec<&str> = body["content"]
        .as_array()?
        .iter()
        .filter(|block| block["type"].as_str().unwrap_or("text") == "text")
        .filter_map(|block| block["text"].as_str())
        .collect();
    let joined = text.join("");
    if joined.trim().is_empty() {
        None
    } else {
        Some(joined)
    }
}

/// Error for a non-success status; gateways may answer with HTML or plain
/// text instead of an API error body.
fn api_error(status: u16, text: &str) -> AiError {
    let message = match serde_json::from_str::<serde_json::Value>(text) {
        Ok(body) => error_message(&body),
        Err(_) => text.trim().chars().take(200).collect(),
    };
    AiError::Api { status, message }
}

fn error_message(body: &serde_json::Value) -> String {
    body["error"]["message"]
        .as_str()
        .map(str::to_string)
        .unwrap_or_else(|| body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_single_block() {
        let body = json!({"content": [{"type": "text", "text": "Hello"}]});
        assert_eq!(extract_reply_text(&body).as_deref(), Some("Hello"));
    }

    #[test]
    fn test_extract_skips_non_text_blocks() {
        let body = json!({"content": [
            {"type": "thinking", "thinking": "..."},
            {"type": "text", "text": "A"},
            {"type": "text", "text": "B"}
        ]});
        assert_eq!(extract_reply_text(&body).as_deref(), Some("AB"));
    }

    #[test]
    fn test_extract_empty_is_none() {
        assert!(extract_reply_text(&json!({"content": []})).is_none());
        assert!(extract_reply_text(&json!({"content": [{"type": "text", "text": "  "}]})).is_none());
        assert!(extract_reply_text(&json!({"unexpected": true})).is_none());
    }

    #[test]
    fn test_error_message_from_api_body() {
        let body = json!({"type": "error", "error": {"type": "overloaded_error", "message": "Overloaded"}});
        assert_eq!(error_message(&body), "Overloaded");
    }

    #[test]
    fn test_api_error_keeps_status_for_non_json_body() {
        let html = "<html><body>502 Bad Gateway</body></html>\n";
        match api_error(502, html) {
            AiError::Api { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message, "<html><body>502 Bad Gateway</body></html>");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_api_error_reads_json_message() {
        let body = r#"{"type":"error","error":{"type":"rate_limit_error","message":"Slow down"}}"#;
        assert_eq!(api_error(429, body).to_string(), "model API returned 429: Slow down");
    }

    #[test]
    fn test_error_display() {
        assert_eq!(AiError::MissingApiKey.to_string(), "ANTHROPIC_API_KEY not set");
        let e = AiError::Api { status: 529, message: "Overloaded".into() };
        assert_eq!(e.to_string(), "model API returned 529: Overloaded");
    }
}
