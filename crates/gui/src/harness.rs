//! Headless test harness for programmatic board manipulation.
//!
//! Drives a `BoardState` through the same input events the GUI produces,
//! with screen coordinates relative to a fixed 1280×720 container at the
//! window origin.

use glam::Vec2;
use shared::FileMeta;

use crate::chat_client::{ChatError, ChatReply};
use crate::state::input::HEADER_HEIGHT;
use crate::state::{
    BoardState, HitTarget, InputEvent, Link, MenuAction, OutgoingChat, Panel, PanelId, PanelKind,
};

/// Container size used by the harness
pub const HARNESS_VIEW_SIZE: Vec2 = Vec2::new(1280.0, 720.0);

/// Headless test harness: owns a whole board
pub struct TestHarness {
    pub board: BoardState,
}

impl TestHarness {
    /// Create a new empty board with the view at the canvas origin
    pub fn new() -> Self {
        let mut board = BoardState::default();
        board.viewport.set_container(Vec2::ZERO, HARNESS_VIEW_SIZE);
        Self { board }
    }

    // ── Panel manipulation ────────────────────────────────────

    /// Create a panel directly at a canvas position
    pub fn create_panel(&mut self, kind: PanelKind, x: f32, y: f32) -> PanelId {
        self.board.registry.create_panel(kind, Vec2::new(x, y))
    }

    pub fn create_chat(&mut self, x: f32, y: f32) -> PanelId {
        self.create_panel(PanelKind::Chat, x, y)
    }

    pub fn create_upload(&mut self, x: f32, y: f32) -> PanelId {
        self.create_panel(PanelKind::FileUpload, x, y)
    }

    /// Close a panel (cascades for upload panels)
    pub fn close(&mut self, id: &str) -> Vec<PanelId> {
        self.board.close_panel(id)
    }

    pub fn bring_to_front(&mut self, id: &str) -> bool {
        self.board.registry.bring_to_front(id)
    }

    pub fn move_panel(&mut self, id: &str, x: f32, y: f32) -> bool {
        self.board.registry.move_panel(id, Vec2::new(x, y))
    }

    /// Clear the whole board
    pub fn clear(&mut self) {
        self.board.clear();
    }

    // ── Pointer input ─────────────────────────────────────────

    /// Secondary click at a screen point
    pub fn right_click(&mut self, x: f32, y: f32) {
        let pos = Vec2::new(x, y);
        let target = self.board.hit_test(pos);
        self.board.handle_input(InputEvent::ContextMenu { pos, target });
    }

    /// Primary click (press and release) at a screen point
    pub fn click(&mut self, x: f32, y: f32) {
        let pos = Vec2::new(x, y);
        let target = self.board.hit_test(pos);
        self.board.handle_input(InputEvent::PointerDown { pos, target });
        self.board.handle_input(InputEvent::PointerUp { pos });
    }

    /// Press at `from`, move to `to`, release
    pub fn drag(&mut self, from: Vec2, to: Vec2) {
        let target = self.board.hit_test(from);
        self.board.handle_input(InputEvent::PointerDown { pos: from, target });
        self.board.handle_input(InputEvent::PointerMove { pos: to });
        self.board.handle_input(InputEvent::PointerUp { pos: to });
    }

    /// Drag a panel by its header by a screen-space delta
    pub fn drag_panel(&mut self, id: &str, delta: Vec2) -> bool {
        let Some(grip) = self.header_point(id) else {
            return false;
        };
        self.drag(grip, grip + delta);
        true
    }

    /// A screen point on the panel's header, if it is not covered
    pub fn header_point(&self, id: &str) -> Option<Vec2> {
        let panel = self.board.registry.get(id)?;
        let rect = self.board.viewport.panel_screen_rect(panel.position, panel.size);
        let grip = rect.min + Vec2::new(rect.size.x / 2.0, HEADER_HEIGHT / 2.0);
        (self.board.hit_test(grip) == HitTarget::PanelHeader(panel.id.clone())).then_some(grip)
    }

    pub fn wheel(&mut self, dy: f32, zoom_modifier: bool) {
        self.board.handle_input(InputEvent::Wheel {
            delta: Vec2::new(0.0, dy),
            zoom_modifier,
        });
    }

    /// Pick an entry of the open context menu
    pub fn choose_menu(&mut self, action: MenuAction) -> Option<PanelId> {
        self.board.choose_menu_action(action)
    }

    // ── Files, insights and chat ──────────────────────────────

    pub fn add_files(&mut self, panel_id: &str, files: Vec<FileMeta>) -> usize {
        self.board.add_files(panel_id, files)
    }

    pub fn remove_file(&mut self, panel_id: &str, name: &str) -> bool {
        self.board.remove_file(panel_id, name)
    }

    pub fn get_insights(&mut self, panel_id: &str) -> Vec<PanelId> {
        self.board.get_insights(panel_id)
    }

    pub fn chat_about_files(&mut self, panel_id: &str) -> Option<PanelId> {
        self.board.chat_about_files(panel_id)
    }

    /// Type into a chat panel and press send
    pub fn send_chat(&mut self, panel_id: &str, text: &str) -> Option<OutgoingChat> {
        self.board.chat_mut(panel_id)?.input = text.to_string();
        self.board.submit_chat(panel_id)
    }

    /// Feed back the server's answer for an outgoing request
    pub fn deliver_reply(&mut self, chat: OutgoingChat, result: Result<String, ChatError>) -> bool {
        self.board.apply_chat_reply(ChatReply {
            panel_id: chat.panel_id,
            prompt: chat.prompt,
            result,
        })
    }

    // ── Inspection ────────────────────────────────────────────

    pub fn panel_count(&self) -> usize {
        self.board.registry.len()
    }

    pub fn panel(&self, id: &str) -> Option<&Panel> {
        self.board.registry.get(id)
    }

    pub fn position_of(&self, id: &str) -> Option<Vec2> {
        self.panel(id).map(|p| p.position)
    }

    pub fn z_of(&self, id: &str) -> Option<u64> {
        self.panel(id).map(|p| p.z_index)
    }

    pub fn topmost_id(&self) -> Option<&PanelId> {
        self.board.registry.topmost().map(|p| &p.id)
    }

    pub fn insight_count(&self, source_id: &str) -> usize {
        self.board.registry.insights_for(source_id).len()
    }

    pub fn links(&self) -> Vec<Link> {
        self.board.links()
    }

    pub fn menu_visible(&self) -> bool {
        self.board.menu.is_visible()
    }

    pub fn zoom(&self) -> f32 {
        self.board.viewport.zoom_level()
    }

    /// Messages of a chat panel as `(sender, text)` pairs
    pub fn chat_transcript(&self, panel_id: &str) -> Vec<(shared::Sender, String)> {
        self.board
            .chat(panel_id)
            .map(|c| c.messages.iter().map(|m| (m.sender, m.text.clone())).collect())
            .unwrap_or_default()
    }

    /// Export all panels as JSON
    pub fn export_board_json(&self) -> String {
        serde_json::to_string_pretty(self.board.registry.panels()).unwrap_or_default()
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_harness_empty() {
        let h = TestHarness::new();
        assert_eq!(h.panel_count(), 0);
        assert!(!h.menu_visible());
    }

    #[test]
    fn test_right_click_then_choose() {
        let mut h = TestHarness::new();
        h.right_click(300.0, 200.0);
        assert!(h.menu_visible());
        let id = h.choose_menu(MenuAction::AddChat).unwrap();
        assert_eq!(h.position_of(&id), Some(Vec2::new(300.0, 200.0)));
        assert!(!h.menu_visible());
    }

    #[test]
    fn test_click_outside_dismisses_menu() {
        let mut h = TestHarness::new();
        h.right_click(300.0, 200.0);
        h.click(900.0, 600.0);
        assert!(!h.menu_visible());
        assert_eq!(h.panel_count(), 0);
    }

    #[test]
    fn test_drag_panel() {
        let mut h = TestHarness::new();
        let id = h.create_chat(100.0, 100.0);
        assert!(h.drag_panel(&id, Vec2::new(40.0, 25.0)));
        assert_eq!(h.position_of(&id), Some(Vec2::new(140.0, 125.0)));
        assert!(!h.board.drag.is_dragging());
    }

    #[test]
    fn test_header_point_covered() {
        let mut h = TestHarness::new();
        let below = h.create_chat(100.0, 100.0);
        h.create_chat(100.0, 100.0);
        assert!(h.header_point(&below).is_none());
    }

    #[test]
    fn test_export_json() {
        let mut h = TestHarness::new();
        h.create_upload(0.0, 0.0);
        let json = h.export_board_json();
        assert!(json.contains("file-upload"));
    }
}
