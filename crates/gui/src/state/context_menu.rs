//! Right-click spawn menu

use glam::Vec2;

use super::registry::{PanelId, PanelKind, PanelRegistry};
use super::viewport::{ScreenRect, Viewport};

/// Rendered menu size in screen pixels (used for outside-click detection)
pub const MENU_SIZE: Vec2 = Vec2::new(192.0, 76.0);

/// Panel-creation actions offered by the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    AddChat,
    AddFile,
}

impl MenuAction {
    pub const ALL: [MenuAction; 2] = [MenuAction::AddChat, MenuAction::AddFile];

    pub fn panel_kind(self) -> PanelKind {
        match self {
            MenuAction::AddChat => PanelKind::Chat,
            MenuAction::AddFile => PanelKind::FileUpload,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum ContextMenuState {
    #[default]
    Hidden,
    /// Open; spawned panels go to `canvas_pos`
    Visible { canvas_pos: Vec2 },
}

impl ContextMenuState {
    pub fn is_visible(&self) -> bool {
        matches!(self, ContextMenuState::Visible { .. })
    }

    pub fn canvas_pos(&self) -> Option<Vec2> {
        match self {
            ContextMenuState::Visible { canvas_pos } => Some(*canvas_pos),
            ContextMenuState::Hidden => None,
        }
    }

    /// Show the menu at a canvas-space point (re-opens if already visible)
    pub fn open(&mut self, canvas_pos: Vec2) {
        *self = ContextMenuState::Visible { canvas_pos };
    }

    /// Hide without side effects
    pub fn dismiss(&mut self) {
        *self = ContextMenuState::Hidden;
    }

    /// Create the chosen panel at the captured point and hide the menu.
    ///
    /// Returns None if the menu was not visible.
    pub fn choose(&mut self, action: MenuAction, registry: &mut PanelRegistry) -> Option<PanelId> {
        let canvas_pos = self.canvas_pos()?;
        let id = registry.create_panel(action.panel_kind(), canvas_pos);
        self.dismiss();
        tracing::info!("Added {} panel at {canvas_pos}", action.panel_kind());
        Some(id)
    }

    /// Where the menu is drawn; it is not scaled by zoom
    pub fn screen_rect(&self, viewport: &Viewport) -> Option<ScreenRect> {
        self.canvas_pos()
            .map(|p| ScreenRect::new(viewport.canvas_to_screen_unscaled(p), MENU_SIZE))
    }
}
