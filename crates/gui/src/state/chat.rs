use std::path::PathBuf;

use serde::Serialize;
use shared::{FileMeta, Sender};

use crate::chat_client::ChatError;

/// Shown in place of a reply when the chat request fails
pub const ERROR_REPLY: &str = "Sorry, I encountered an error. Please try again.";

/// Previews kept per attachment group (images, other files)
pub const MAX_PREVIEWS: usize = 5;

/// A single chat message
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
    pub is_error: bool,
}

impl ChatMessage {
    pub fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            sender,
            text: text.into(),
            is_error: false,
        }
    }

    fn error() -> Self {
        Self {
            sender: Sender::Ai,
            text: ERROR_REPLY.to_string(),
            is_error: true,
        }
    }
}

/// A file attached to the chat input; `path` is set when it came from disk
#[derive(Debug, Clone, PartialEq)]
pub struct AttachedFile {
    pub meta: FileMeta,
    pub path: Option<PathBuf>,
}

impl AttachedFile {
    pub fn new(meta: FileMeta, path: Option<PathBuf>) -> Self {
        Self { meta, path }
    }
}

/// Pending attachments, split the way they are previewed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attachments {
    pub images: Vec<AttachedFile>,
    pub others: Vec<FileMeta>,
}

impl Attachments {
    pub fn is_empty(&self) -> bool {
        self.images.is_empty() && self.others.is_empty()
    }

    /// Bracketed summary appended to the outgoing prompt
    pub fn summary(&self) -> Option<String> {
        let mut parts = Vec::new();
        if !self.images.is_empty() {
            parts.push(format!("[{} image(s) attached]", self.images.len()));
        }
        if !self.others.is_empty() {
            let names: Vec<&str> = self.others.iter().map(|f| f.name.as_str()).collect();
            parts.push(format!(
                "[{} other file(s) attached: {}]",
                self.others.len(),
                names.join(", ")
            ));
        }
        (!parts.is_empty()).then(|| parts.join(" "))
    }
}

/// Conversation state of one chat panel
#[derive(Debug, Default)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub input: String,
    pub is_loading: bool,
    pub attachments: Attachments,
    pub last_failed_prompt: Option<String>,
}

impl ChatState {
    /// Start a conversation from the panel's initial messages
    pub fn from_seed(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            ..Default::default()
        }
    }

    /// Replace the pending attachments with a new selection.
    ///
    /// Image previews whose file can no longer be read are skipped.
    pub fn attach(&mut self, files: Vec<AttachedFile>) {
        let mut attachments = Attachments::default();
        for file in files {
            if file.meta.is_image() {
                if let Some(path) = &file.path {
                    if let Err(e) = std::fs::metadata(path) {
                        tracing::debug!("Skipping preview for {}: {e}", path.display());
                        continue;
                    }
                }
                if attachments.images.len() < MAX_PREVIEWS {
                    attachments.images.push(file);
                }
            } else if attachments.others.len() < MAX_PREVIEWS {
                attachments.others.push(file.meta);
            }
        }
        self.attachments = attachments;
    }

    pub fn clear_attachments(&mut self) {
        self.attachments = Attachments::default();
    }

    /// Send is possible with text or attachments, and nothing in flight
    pub fn can_send(&self) -> bool {
        !self.is_loading && (!self.input.trim().is_empty() || !self.attachments.is_empty())
    }

    /// Consume the input and attachments, returning the prompt to send.
    ///
    /// The user's text (if any) is appended to the conversation; the prompt
    /// additionally carries the attachment summary.
    pub fn begin_send(&mut self) -> Option<String> {
        if !self.can_send() {
            return None;
        }
        let text = self.input.trim().to_string();
        if !text.is_empty() {
            self.messages.push(ChatMessage::new(Sender::User, text.clone()));
        }

        let prompt = match self.attachments.summary() {
            Some(summary) => format!("{text} {summary}").trim().to_string(),
            None => text,
        };

        self.input.clear();
        self.clear_attachments();
        self.is_loading = true;
        self.last_failed_prompt = None;
        Some(prompt)
    }

    /// Re-send the last prompt that failed
    pub fn retry(&mut self) -> Option<String> {
        if self.is_loading {
            return None;
        }
        let prompt = self.last_failed_prompt.take()?;
        self.is_loading = true;
        Some(prompt)
    }

    /// Apply the outcome of a request started by `begin_send` or `retry`
    pub fn finish(&mut self, prompt: String, result: Result<String, ChatError>) {
        self.is_loading = false;
        match result {
            Ok(text) => self.messages.push(ChatMessage::new(Sender::Ai, text)),
            Err(e) => {
                tracing::warn!("Chat request failed: {e}");
                self.messages.push(ChatMessage::error());
                self.last_failed_prompt = Some(prompt);
            }
        }
    }

    pub fn clear(&mut self) {
        self.messages.clear();
        self.input.clear();
        self.clear_attachments();
        self.last_failed_prompt = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(name: &str) -> AttachedFile {
        AttachedFile::new(FileMeta::new(name, 10, ""), None)
    }

    fn doc(name: &str) -> AttachedFile {
        AttachedFile::new(FileMeta::new(name, 10, ""), None)
    }

    #[test]
    fn test_send_plain_text() {
        let mut chat = ChatState::default();
        chat.input = "  hello  ".to_string();
        assert_eq!(chat.begin_send(), Some("hello".to_string()));
        assert!(chat.is_loading);
        assert!(chat.input.is_empty());
        assert_eq!(chat.messages, vec![ChatMessage::new(Sender::User, "hello")]);
    }

    #[test]
    fn test_nothing_to_send() {
        let mut chat = ChatState::default();
        chat.input = "   ".to_string();
        assert!(!chat.can_send());
        assert_eq!(chat.begin_send(), None);
        assert!(chat.messages.is_empty());
    }

    #[test]
    fn test_no_send_while_loading() {
        let mut chat = ChatState::default();
        chat.input = "one".to_string();
        chat.begin_send();
        chat.input = "two".to_string();
        assert_eq!(chat.begin_send(), None);
        assert_eq!(chat.messages.len(), 1);
    }

    #[test]
    fn test_attachment_summary_in_prompt() {
        let mut chat = ChatState::default();
        chat.attach(vec![image("a.png"), image("b.jpg"), doc("q3.csv"), doc("notes.txt")]);
        chat.input = "what is this?".to_string();
        assert_eq!(
            chat.begin_send().unwrap(),
            "what is this? [2 image(s) attached] [2 other file(s) attached: q3.csv, notes.txt]"
        );
        assert!(chat.attachments.is_empty());
        assert_eq!(chat.messages.len(), 1);
        assert_eq!(chat.messages[0].text, "what is this?");
    }

    #[test]
    fn test_attachments_only() {
        let mut chat = ChatState::default();
        chat.attach(vec![doc("q3.csv")]);
        assert!(chat.can_send());
        assert_eq!(chat.begin_send().unwrap(), "[1 other file(s) attached: q3.csv]");
        assert!(chat.messages.is_empty());
    }

    #[test]
    fn test_attach_replaces_and_caps() {
        let mut chat = ChatState::default();
        chat.attach(vec![doc("old.csv")]);
        chat.attach((0..8).map(|i| image(&format!("{i}.png"))).collect());
        assert_eq!(chat.attachments.images.len(), MAX_PREVIEWS);
        assert!(chat.attachments.others.is_empty());
    }

    #[test]
    fn test_unreadable_image_skipped() {
        let mut chat = ChatState::default();
        let missing = AttachedFile::new(
            FileMeta::new("gone.png", 1, ""),
            Some(PathBuf::from("/definitely/not/here/gone.png")),
        );
        chat.attach(vec![missing, image("ok.png")]);
        assert_eq!(chat.attachments.images.len(), 1);
        assert_eq!(chat.attachments.images[0].meta.name, "ok.png");
    }

    #[test]
    fn test_finish_ok() {
        let mut chat = ChatState::default();
        chat.input = "hi".to_string();
        let prompt = chat.begin_send().unwrap();
        chat.finish(prompt, Ok("hello there".to_string()));
        assert!(!chat.is_loading);
        assert_eq!(chat.messages[1], ChatMessage::new(Sender::Ai, "hello there"));
    }

    #[test]
    fn test_finish_error_then_retry() {
        let mut chat = ChatState::default();
        chat.input = "hi".to_string();
        let prompt = chat.begin_send().unwrap();
        chat.finish(prompt, Err(ChatError::Status(500)));
        assert!(!chat.is_loading);
        let last = chat.messages.last().unwrap();
        assert_eq!(last.text, ERROR_REPLY);
        assert!(last.is_error);

        assert_eq!(chat.retry(), Some("hi".to_string()));
        assert!(chat.is_loading);
        assert_eq!(chat.retry(), None);
    }

    #[test]
    fn test_from_seed() {
        let chat = ChatState::from_seed(vec![ChatMessage::new(Sender::Ai, "welcome")]);
        assert_eq!(chat.messages.len(), 1);
        assert!(!chat.is_loading);
    }
}
