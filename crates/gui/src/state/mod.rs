pub mod chat;
pub mod context_menu;
pub mod drag;
pub mod input;
pub mod intake;
pub mod links;
pub mod registry;
pub mod settings;
pub mod viewport;

use std::collections::HashMap;

use chat::ChatState;
pub use context_menu::{ContextMenuState, MenuAction};
pub use drag::{DragSession, DragState};
pub use input::{HitTarget, InputEvent};
use intake::FileIntake;
pub use links::{compute_links, Link};
pub use registry::{short_id, Panel, PanelId, PanelKind, PanelPayload, PanelRegistry};
pub use settings::{AppSettings, Language};
pub use viewport::Viewport;

use crate::chat_client::ChatReply;

/// A prompt ready to go to the chat server
#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingChat {
    pub panel_id: PanelId,
    pub prompt: String,
}

/// Whole board: registry, viewport, controllers and per-panel local state
#[derive(Debug, Default)]
pub struct BoardState {
    pub registry: PanelRegistry,
    pub viewport: Viewport,
    pub drag: DragState,
    pub menu: ContextMenuState,
    /// File lists of upload panels
    intakes: HashMap<PanelId, FileIntake>,
    /// Conversations of chat panels
    chats: HashMap<PanelId, ChatState>,
}

impl BoardState {
    /// Create the menu's panel at the captured point
    pub fn choose_menu_action(&mut self, action: MenuAction) -> Option<PanelId> {
        self.menu.choose(action, &mut self.registry)
    }

    /// Close a panel (with cascade) and drop the local state of everything
    /// removed
    pub fn close_panel(&mut self, id: &str) -> Vec<PanelId> {
        let removed = self.registry.remove_panel(id);
        for gone in &removed {
            self.intakes.remove(gone);
            self.chats.remove(gone);
        }
        if !removed.is_empty() {
            tracing::info!("Closed {} ({} panel(s) removed)", short_id(id), removed.len());
        }
        removed
    }

    // ── File intake ─────────────────────────────────────────

    pub fn intake(&self, panel_id: &str) -> Option<&FileIntake> {
        self.intakes.get(panel_id)
    }

    /// File list of an upload panel, created on first use
    pub fn intake_mut(&mut self, panel_id: &str) -> Option<&mut FileIntake> {
        let is_upload = self
            .registry
            .get(panel_id)
            .is_some_and(|p| p.kind() == PanelKind::FileUpload);
        if !is_upload {
            return None;
        }
        Some(self.intakes.entry(panel_id.to_string()).or_default())
    }

    /// Files currently listed by an upload panel
    pub fn files_of(&self, panel_id: &str) -> Vec<shared::FileMeta> {
        self.intake(panel_id)
            .map(|i| i.files().to_vec())
            .unwrap_or_default()
    }

    pub fn add_files(&mut self, panel_id: &str, files: Vec<shared::FileMeta>) -> usize {
        self.intake_mut(panel_id).map_or(0, |i| i.add_files(files))
    }

    pub fn remove_file(&mut self, panel_id: &str, name: &str) -> bool {
        self.intakes
            .get_mut(panel_id)
            .is_some_and(|i| i.remove_file(name))
    }

    /// "Chat about files" on an upload panel
    pub fn chat_about_files(&mut self, panel_id: &str) -> Option<PanelId> {
        let files = self.files_of(panel_id);
        self.registry.request_chat(panel_id, &files)
    }

    /// "Get insights" on an upload panel
    pub fn get_insights(&mut self, panel_id: &str) -> Vec<PanelId> {
        let files = self.files_of(panel_id);
        self.registry.request_insights(panel_id, &files)
    }

    // ── Chat ────────────────────────────────────────────────

    pub fn chat(&self, panel_id: &str) -> Option<&ChatState> {
        self.chats.get(panel_id)
    }

    /// Conversation of a chat panel, seeded from its initial messages on
    /// first use
    pub fn chat_mut(&mut self, panel_id: &str) -> Option<&mut ChatState> {
        let seed = match &self.registry.get(panel_id)?.payload {
            PanelPayload::Chat { initial_messages } => initial_messages,
            _ => return None,
        };
        Some(
            self.chats
                .entry(panel_id.to_string())
                .or_insert_with(|| ChatState::from_seed(seed.clone())),
        )
    }

    /// Send the panel's input; returns the request to dispatch
    pub fn submit_chat(&mut self, panel_id: &str) -> Option<OutgoingChat> {
        let prompt = self.chat_mut(panel_id)?.begin_send()?;
        Some(OutgoingChat {
            panel_id: panel_id.to_string(),
            prompt,
        })
    }

    pub fn retry_chat(&mut self, panel_id: &str) -> Option<OutgoingChat> {
        let prompt = self.chat_mut(panel_id)?.retry()?;
        Some(OutgoingChat {
            panel_id: panel_id.to_string(),
            prompt,
        })
    }

    /// Apply a reply; replies for closed panels are dropped
    pub fn apply_chat_reply(&mut self, reply: ChatReply) -> bool {
        match self.chats.get_mut(&reply.panel_id) {
            Some(chat) if self.registry.contains(&reply.panel_id) => {
                chat.finish(reply.prompt, reply.result);
                true
            }
            _ => {
                tracing::debug!("Discarding reply for closed panel {}", short_id(&reply.panel_id));
                false
            }
        }
    }

    /// Chat panels waiting for a reply
    pub fn pending_chat_count(&self) -> usize {
        self.chats.values().filter(|c| c.is_loading).count()
    }

    // ── Viewport ────────────────────────────────────────────

    pub fn zoom_in(&mut self) {
        self.viewport.zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.viewport.zoom_out();
    }

    /// The empty-board hint is hidden while the context menu is open
    pub fn shows_empty_hint(&self) -> bool {
        self.registry.is_empty() && !self.menu.is_visible()
    }

    pub fn links(&self) -> Vec<Link> {
        compute_links(&self.registry)
    }

    /// Start a fresh board; the viewport is kept
    pub fn clear(&mut self) {
        self.registry.clear();
        self.drag = DragState::default();
        self.menu.dismiss();
        self.intakes.clear();
        self.chats.clear();
        tracing::info!("Board cleared");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat_client::ChatError;
    use glam::Vec2;
    use shared::{FileMeta, Sender};

    fn csv(name: &str) -> FileMeta {
        FileMeta::new(name, 512, "")
    }

    #[test]
    fn test_intake_only_for_upload_panels() {
        let mut board = BoardState::default();
        let chat = board.registry.create_panel(PanelKind::Chat, Vec2::ZERO);
        assert!(board.intake_mut(&chat).is_none());
        assert_eq!(board.add_files(&chat, vec![csv("a.csv")]), 0);
    }

    #[test]
    fn test_get_insights_uses_intake() {
        let mut board = BoardState::default();
        let up = board.registry.create_panel(PanelKind::FileUpload, Vec2::ZERO);
        assert!(board.get_insights(&up).is_empty());
        board.add_files(&up, vec![csv("a.csv")]);
        assert_eq!(board.get_insights(&up).len(), 3);
    }

    #[test]
    fn test_close_upload_drops_local_state() {
        let mut board = BoardState::default();
        let up = board.registry.create_panel(PanelKind::FileUpload, Vec2::ZERO);
        board.add_files(&up, vec![csv("a.csv")]);
        board.get_insights(&up);
        assert_eq!(board.close_panel(&up).len(), 4);
        assert!(board.intake(&up).is_none());
        assert!(board.registry.is_empty());
    }

    #[test]
    fn test_chat_seeded_from_payload() {
        let mut board = BoardState::default();
        let up = board.registry.create_panel(PanelKind::FileUpload, Vec2::ZERO);
        board.add_files(&up, vec![csv("a.csv")]);
        let chat = board.chat_about_files(&up).unwrap();
        let state = board.chat_mut(&chat).unwrap();
        assert_eq!(state.messages.len(), 1);
        assert_eq!(state.messages[0].sender, Sender::Ai);
    }

    #[test]
    fn test_submit_and_reply() {
        let mut board = BoardState::default();
        let chat = board.registry.create_panel(PanelKind::Chat, Vec2::ZERO);
        board.chat_mut(&chat).unwrap().input = "hi".to_string();
        let out = board.submit_chat(&chat).unwrap();
        assert_eq!(out.prompt, "hi");
        assert_eq!(board.pending_chat_count(), 1);

        assert!(board.apply_chat_reply(ChatReply {
            panel_id: chat.clone(),
            prompt: out.prompt,
            result: Ok("hello".to_string()),
        }));
        assert_eq!(board.pending_chat_count(), 0);
        assert_eq!(board.chat(&chat).unwrap().messages.len(), 2);
    }

    #[test]
    fn test_reply_for_closed_panel_discarded() {
        let mut board = BoardState::default();
        let chat = board.registry.create_panel(PanelKind::Chat, Vec2::ZERO);
        board.chat_mut(&chat).unwrap().input = "hi".to_string();
        let out = board.submit_chat(&chat).unwrap();
        board.close_panel(&chat);
        assert!(!board.apply_chat_reply(ChatReply {
            panel_id: chat,
            prompt: out.prompt,
            result: Err(ChatError::Status(502)),
        }));
    }

    #[test]
    fn test_empty_hint_hidden_while_menu_open() {
        let mut board = BoardState::default();
        assert!(board.shows_empty_hint());
        board.menu.open(Vec2::new(40.0, 40.0));
        assert!(!board.shows_empty_hint());
        board.menu.dismiss();
        board.registry.create_panel(PanelKind::Chat, Vec2::ZERO);
        assert!(!board.shows_empty_hint());
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut board = BoardState::default();
        board.menu.open(Vec2::ZERO);
        board.choose_menu_action(MenuAction::AddChat);
        board.menu.open(Vec2::ZERO);
        board.clear();
        assert!(board.registry.is_empty());
        assert!(!board.menu.is_visible());
    }
}
