//! Panel dragging state machine
//!
//! `Idle -> Dragging` on pointer-down on a panel header, `Dragging -> Idle`
//! on pointer-up anywhere. Only one panel is dragged at a time.

use glam::Vec2;

use super::registry::{PanelId, PanelRegistry};

/// Anchor captured when a drag starts
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    pub panel_id: PanelId,
    /// Pointer position (screen) at drag start
    pub pointer_start: Vec2,
    /// Panel position (canvas) at drag start
    pub panel_start: Vec2,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging(_))
    }

    pub fn dragged_panel(&self) -> Option<&PanelId> {
        match self {
            DragState::Dragging(session) => Some(&session.panel_id),
            DragState::Idle => None,
        }
    }

    /// Start dragging a panel: capture anchors and raise it to the front.
    ///
    /// Ignored while another drag is in progress or when the panel does not
    /// exist. Returns true if a drag started.
    pub fn begin(&mut self, registry: &mut PanelRegistry, panel_id: &str, pointer: Vec2) -> bool {
        if self.is_dragging() {
            tracing::debug!("Ignoring drag start on {panel_id}: already dragging");
            return false;
        }
        let Some(panel) = registry.get(panel_id) else {
            return false;
        };
        let session = DragSession {
            panel_id: panel.id.clone(),
            pointer_start: pointer,
            panel_start: panel.position,
        };
        registry.bring_to_front(panel_id);
        *self = DragState::Dragging(session);
        true
    }

    /// Move the dragged panel so it follows the pointer.
    ///
    /// The screen delta is divided by the zoom level so the panel tracks the
    /// pointer at constant apparent speed. Returns false when idle or when the
    /// dragged panel has since been removed.
    pub fn update(&self, registry: &mut PanelRegistry, pointer: Vec2, zoom: f32) -> bool {
        let DragState::Dragging(session) = self else {
            return false;
        };
        let delta = (pointer - session.pointer_start) / zoom;
        registry.move_panel(&session.panel_id, session.panel_start + delta)
    }

    /// Finish the drag (pointer released anywhere). Returns the panel that
    /// was being dragged.
    pub fn end(&mut self) -> Option<PanelId> {
        match std::mem::take(self) {
            DragState::Dragging(session) => Some(session.panel_id),
            DragState::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::registry::PanelKind;

    fn setup() -> (PanelRegistry, PanelId) {
        let mut reg = PanelRegistry::default();
        let id = reg.create_panel(PanelKind::Chat, Vec2::new(100.0, 100.0));
        (reg, id)
    }

    #[test]
    fn test_drag_at_zoom_one() {
        let (mut reg, id) = setup();
        let mut drag = DragState::default();
        assert!(drag.begin(&mut reg, &id, Vec2::new(500.0, 400.0)));
        drag.update(&mut reg, Vec2::new(550.0, 430.0), 1.0);
        assert_eq!(reg.get(&id).unwrap().position, Vec2::new(150.0, 130.0));
    }

    #[test]
    fn test_drag_at_zoom_two_halves_delta() {
        let (mut reg, id) = setup();
        let mut drag = DragState::default();
        drag.begin(&mut reg, &id, Vec2::new(500.0, 400.0));
        drag.update(&mut reg, Vec2::new(550.0, 430.0), 2.0);
        assert_eq!(reg.get(&id).unwrap().position, Vec2::new(125.0, 115.0));
    }

    #[test]
    fn test_updates_are_relative_to_anchor() {
        let (mut reg, id) = setup();
        let mut drag = DragState::default();
        drag.begin(&mut reg, &id, Vec2::ZERO);
        drag.update(&mut reg, Vec2::new(10.0, 0.0), 1.0);
        drag.update(&mut reg, Vec2::new(20.0, 0.0), 1.0);
        assert_eq!(reg.get(&id).unwrap().position, Vec2::new(120.0, 100.0));
    }

    #[test]
    fn test_begin_brings_to_front() {
        let (mut reg, id) = setup();
        reg.create_panel(PanelKind::Chat, Vec2::ZERO);
        let mut drag = DragState::default();
        drag.begin(&mut reg, &id, Vec2::ZERO);
        assert_eq!(reg.topmost().unwrap().id, id);
    }

    #[test]
    fn test_second_begin_ignored() {
        let (mut reg, a) = setup();
        let b = reg.create_panel(PanelKind::Chat, Vec2::ZERO);
        let mut drag = DragState::default();
        assert!(drag.begin(&mut reg, &a, Vec2::ZERO));
        assert!(!drag.begin(&mut reg, &b, Vec2::ZERO));
        assert_eq!(drag.dragged_panel(), Some(&a));
    }

    #[test]
    fn test_begin_unknown_panel() {
        let (mut reg, _) = setup();
        let mut drag = DragState::default();
        assert!(!drag.begin(&mut reg, "missing", Vec2::ZERO));
        assert!(!drag.is_dragging());
    }

    #[test]
    fn test_end_returns_to_idle() {
        let (mut reg, id) = setup();
        let mut drag = DragState::default();
        drag.begin(&mut reg, &id, Vec2::ZERO);
        assert_eq!(drag.end(), Some(id));
        assert_eq!(drag, DragState::Idle);
        assert_eq!(drag.end(), None);
        assert!(!drag.update(&mut reg, Vec2::new(5.0, 5.0), 1.0));
    }

    #[test]
    fn test_update_after_panel_removed() {
        let (mut reg, id) = setup();
        let mut drag = DragState::default();
        drag.begin(&mut reg, &id, Vec2::ZERO);
        reg.remove_panel(&id);
        assert!(!drag.update(&mut reg, Vec2::new(5.0, 5.0), 1.0));
        assert_eq!(drag.end(), Some(id));
    }
}
