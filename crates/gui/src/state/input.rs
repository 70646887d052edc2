//! Abstract pointer input and hit testing
//!
//! The front-end (or the headless harness) translates raw events into
//! `InputEvent`s; `BoardState::handle_input` drives the drag and context-menu
//! state machines from them.

use glam::Vec2;

use super::registry::PanelId;
use super::BoardState;

/// Height of the draggable header strip of every panel, in screen pixels
pub const HEADER_HEIGHT: f32 = 48.0;

/// What a screen point landed on
#[derive(Debug, Clone, PartialEq)]
pub enum HitTarget {
    Background,
    ContextMenu,
    PanelHeader(PanelId),
    PanelBody(PanelId),
}

impl HitTarget {
    pub fn panel_id(&self) -> Option<&PanelId> {
        match self {
            HitTarget::PanelHeader(id) | HitTarget::PanelBody(id) => Some(id),
            HitTarget::Background | HitTarget::ContextMenu => None,
        }
    }
}

/// Pointer events in screen coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    PointerDown { pos: Vec2, target: HitTarget },
    PointerMove { pos: Vec2 },
    PointerUp { pos: Vec2 },
    /// Secondary click
    ContextMenu { pos: Vec2, target: HitTarget },
    /// Wheel or trackpad scroll; `zoom_modifier` is Ctrl/Cmd held
    Wheel { delta: Vec2, zoom_modifier: bool },
}

impl BoardState {
    /// Resolve a screen point: the context menu is above everything, then
    /// panels from the highest zIndex down.
    pub fn hit_test(&self, screen: Vec2) -> HitTarget {
        if let Some(rect) = self.menu.screen_rect(&self.viewport) {
            if rect.contains(screen) {
                return HitTarget::ContextMenu;
            }
        }
        for panel in self.registry.panels_by_z().into_iter().rev() {
            let rect = self.viewport.panel_screen_rect(panel.position, panel.size);
            if rect.contains(screen) {
                return if screen.y < rect.min.y + HEADER_HEIGHT {
                    HitTarget::PanelHeader(panel.id.clone())
                } else {
                    HitTarget::PanelBody(panel.id.clone())
                };
            }
        }
        HitTarget::Background
    }

    /// A press that landed off the board (menu bar, window, zoom buttons)
    /// still closes the context menu unless it is inside the menu.
    pub fn pointer_down_elsewhere(&mut self, screen: Vec2) {
        let inside_menu = self
            .menu
            .screen_rect(&self.viewport)
            .is_some_and(|rect| rect.contains(screen));
        if !inside_menu {
            self.menu.dismiss();
        }
    }

    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerDown { pos, target } => {
                if target != HitTarget::ContextMenu && self.menu.is_visible() {
                    self.menu.dismiss();
                }
                match target {
                    HitTarget::PanelHeader(id) => {
                        self.drag.begin(&mut self.registry, &id, pos);
                    }
                    HitTarget::PanelBody(id) => {
                        self.registry.bring_to_front(&id);
                    }
                    HitTarget::Background | HitTarget::ContextMenu => {}
                }
            }
            InputEvent::PointerMove { pos } => {
                let zoom = self.viewport.zoom_level();
                self.drag.update(&mut self.registry, pos, zoom);
            }
            InputEvent::PointerUp { .. } => {
                if let Some(id) = self.drag.end() {
                    tracing::debug!("Finished dragging {}", super::short_id(&id));
                }
            }
            InputEvent::ContextMenu { pos, target } => {
                if target == HitTarget::Background {
                    let canvas = self.viewport.screen_to_canvas(pos);
                    self.menu.open(canvas);
                    tracing::debug!("Context menu at {canvas}");
                }
            }
            InputEvent::Wheel {
                delta,
                zoom_modifier,
            } => {
                if self.viewport.apply_wheel(delta, zoom_modifier) {
                    tracing::debug!("Zoom {:.1}", self.viewport.zoom_level());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::registry::PanelKind;

    fn board() -> BoardState {
        let mut board = BoardState::default();
        board.viewport.set_container(Vec2::ZERO, Vec2::new(1280.0, 720.0));
        board
    }

    #[test]
    fn test_hit_test_header_and_body() {
        let mut b = board();
        let id = b.registry.create_panel(PanelKind::Chat, Vec2::new(100.0, 100.0));
        assert_eq!(b.hit_test(Vec2::new(110.0, 110.0)), HitTarget::PanelHeader(id.clone()));
        assert_eq!(b.hit_test(Vec2::new(110.0, 300.0)), HitTarget::PanelBody(id));
        assert_eq!(b.hit_test(Vec2::new(50.0, 50.0)), HitTarget::Background);
    }

    #[test]
    fn test_press_off_board_closes_menu() {
        let mut b = board();
        b.handle_input(InputEvent::ContextMenu {
            pos: Vec2::new(300.0, 300.0),
            target: HitTarget::Background,
        });
        b.pointer_down_elsewhere(Vec2::new(310.0, 310.0));
        assert!(b.menu.is_visible());

        b.pointer_down_elsewhere(Vec2::new(1250.0, 700.0));
        assert!(!b.menu.is_visible());
    }

    #[test]
    fn test_hit_test_topmost_wins() {
        let mut b = board();
        let a = b.registry.create_panel(PanelKind::Chat, Vec2::new(100.0, 100.0));
        let c = b.registry.create_panel(PanelKind::Chat, Vec2::new(120.0, 100.0));
        assert_eq!(b.hit_test(Vec2::new(200.0, 300.0)), HitTarget::PanelBody(c));
        b.registry.bring_to_front(&a);
        assert_eq!(b.hit_test(Vec2::new(200.0, 300.0)), HitTarget::PanelBody(a));
    }

    #[test]
    fn test_hit_test_menu_above_panels() {
        let mut b = board();
        b.registry.create_panel(PanelKind::Chat, Vec2::new(0.0, 0.0));
        b.menu.open(Vec2::new(10.0, 10.0));
        assert_eq!(b.hit_test(Vec2::new(20.0, 20.0)), HitTarget::ContextMenu);
    }

    #[test]
    fn test_hit_test_follows_zoom() {
        let mut b = board();
        let id = b.registry.create_panel(PanelKind::Insight, Vec2::new(100.0, 100.0));
        b.viewport.set_zoom(2.0);
        assert_eq!(b.hit_test(Vec2::new(150.0, 150.0)), HitTarget::Background);
        assert_eq!(b.hit_test(Vec2::new(210.0, 210.0)), HitTarget::PanelHeader(id));
    }

    #[test]
    fn test_context_menu_only_on_background() {
        let mut b = board();
        let id = b.registry.create_panel(PanelKind::Chat, Vec2::ZERO);
        b.handle_input(InputEvent::ContextMenu {
            pos: Vec2::new(5.0, 5.0),
            target: HitTarget::PanelBody(id),
        });
        assert!(!b.menu.is_visible());
        b.handle_input(InputEvent::ContextMenu {
            pos: Vec2::new(900.0, 600.0),
            target: HitTarget::Background,
        });
        assert_eq!(b.menu.canvas_pos(), Some(Vec2::new(900.0, 600.0)));
    }

    #[test]
    fn test_pointer_down_inside_menu_keeps_it() {
        let mut b = board();
        b.menu.open(Vec2::new(10.0, 10.0));
        b.handle_input(InputEvent::PointerDown {
            pos: Vec2::new(20.0, 20.0),
            target: HitTarget::ContextMenu,
        });
        assert!(b.menu.is_visible());
        b.handle_input(InputEvent::PointerDown {
            pos: Vec2::new(600.0, 600.0),
            target: HitTarget::Background,
        });
        assert!(!b.menu.is_visible());
        assert!(b.registry.is_empty());
    }

    #[test]
    fn test_body_click_raises_without_drag() {
        let mut b = board();
        let a = b.registry.create_panel(PanelKind::Chat, Vec2::ZERO);
        b.registry.create_panel(PanelKind::Chat, Vec2::new(500.0, 0.0));
        b.handle_input(InputEvent::PointerDown {
            pos: Vec2::new(10.0, 200.0),
            target: HitTarget::PanelBody(a.clone()),
        });
        assert_eq!(b.registry.topmost().unwrap().id, a);
        assert!(!b.drag.is_dragging());
    }

    #[test]
    fn test_wheel_zoom_and_scroll() {
        let mut b = board();
        b.handle_input(InputEvent::Wheel {
            delta: Vec2::new(0.0, -50.0),
            zoom_modifier: true,
        });
        assert_eq!(b.viewport.zoom_level(), 1.1);
        b.handle_input(InputEvent::Wheel {
            delta: Vec2::new(30.0, 40.0),
            zoom_modifier: false,
        });
        assert_eq!(b.viewport.scroll_offset(), Vec2::new(30.0, 40.0));
    }
}
