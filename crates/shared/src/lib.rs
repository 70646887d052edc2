use serde::{Deserialize, Serialize};

pub mod files;

pub use files::{accepted_extensions, is_accepted, mime_for_name, FileMeta};

/// Chat request sent from a chat panel to the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// User text, possibly followed by a bracketed attachment summary
    pub message: String,
}

/// Chat reply returned by the server
///
/// Upstream failures are folded into `text` as an apologetic message, so a
/// successful HTTP exchange always carries something displayable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub text: String,
}

/// Who authored a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    Ai,
}
