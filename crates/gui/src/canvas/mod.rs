//! Whiteboard canvas: input translation, background layer, panels and
//! overlays

mod context_menu;
mod painting;

use egui::{LayerId, Order, Rect, Sense};
use glam::Vec2;

use crate::app::AppState;
use crate::state::{HitTarget, InputEvent, Panel, PanelId, PanelKind};
use crate::ui::{chat_panel, file_panel, files, insight_panel, panel_frame, zoom_controls};

pub(crate) fn to_pos2(v: Vec2) -> egui::Pos2 {
    egui::pos2(v.x, v.y)
}

pub(crate) fn to_vec2(p: egui::Pos2) -> Vec2 {
    Vec2::new(p.x, p.y)
}

fn panel_area_id(id: &str) -> egui::Id {
    egui::Id::new(("board_panel", id))
}

/// Deferred panel actions, applied after all panels are drawn
pub enum PanelAction {
    Close(PanelId),
    SendChat(PanelId),
    RetryChat(PanelId),
    ChatAboutFiles(PanelId),
    GetInsights(PanelId),
}

#[derive(Default)]
pub struct CanvasView {
    /// Scroll has been centred on the canvas
    centered: bool,
}

impl CanvasView {
    pub fn show(&mut self, ui: &mut egui::Ui, state: &mut AppState) {
        let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::click_and_drag());
        let ctx = ui.ctx().clone();

        state
            .board
            .viewport
            .set_container(to_vec2(rect.min), Vec2::new(rect.width(), rect.height()));
        if !self.centered {
            state.board.viewport.center_scroll();
            self.centered = true;
        }

        self.handle_pointer(&ctx, rect, state);

        // Middle-button drag pans
        if response.dragged_by(egui::PointerButton::Middle) {
            let d = response.drag_delta();
            state.board.viewport.pan_by(Vec2::new(-d.x, -d.y));
        }

        // ── Background layer ────────────────────────────────
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 0.0, painting::CANVAS_BG);
        if state.settings.grid.visible {
            painting::draw_grid(&painter, rect, &state.board.viewport, state.settings.grid.opacity);
        }
        painting::draw_links(&painter, &state.board);
        if state.board.shows_empty_hint() {
            painting::draw_empty_hint(&painter, rect);
        }

        // ── Panels ──────────────────────────────────────────
        let actions = self.show_panels(&ctx, rect, state);
        self.apply_actions(actions, state);

        // ── Overlays ────────────────────────────────────────
        context_menu::show(&ctx, state);
        zoom_controls::show(&ctx, rect, &mut state.board);

        self.handle_dropped_files(&ctx, state);

        if state.board.drag.is_dragging() {
            ctx.set_cursor_icon(egui::CursorIcon::Grabbing);
        } else if let Some(pos) = ctx.pointer_hover_pos() {
            if rect.contains(pos)
                && matches!(state.board.hit_test(to_vec2(pos)), HitTarget::PanelHeader(_))
            {
                ctx.set_cursor_icon(egui::CursorIcon::Grab);
            }
        }
    }

    /// Whether a press on this layer belongs to the board (not a window or
    /// the zoom controls)
    fn is_board_layer(layer: Option<LayerId>, state: &AppState) -> bool {
        match layer {
            None => true,
            Some(layer) => {
                layer.order == Order::Background
                    || layer.id == context_menu::area_id()
                    || state
                        .board
                        .registry
                        .panels()
                        .iter()
                        .any(|p| layer.id == panel_area_id(&p.id))
            }
        }
    }

    /// Translate raw pointer input into board events
    fn handle_pointer(&self, ctx: &egui::Context, rect: Rect, state: &mut AppState) {
        let (pressed, released, secondary, pos, zoom_delta, scroll) = ctx.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.pointer.button_clicked(egui::PointerButton::Secondary),
                i.pointer.interact_pos(),
                i.zoom_delta(),
                i.smooth_scroll_delta,
            )
        });
        let Some(pos) = pos else {
            return;
        };
        let screen = to_vec2(pos);
        let on_board = rect.contains(pos) && Self::is_board_layer(ctx.layer_id_at(pos), state);

        if pressed {
            if on_board {
                let target = state.board.hit_test(screen);
                state.board.handle_input(InputEvent::PointerDown { pos: screen, target });
            } else {
                state.board.pointer_down_elsewhere(screen);
            }
        }
        if state.board.drag.is_dragging() {
            state.board.handle_input(InputEvent::PointerMove { pos: screen });
        }
        if released {
            state.board.handle_input(InputEvent::PointerUp { pos: screen });
        }
        if secondary && on_board {
            let target = state.board.hit_test(screen);
            state.board.handle_input(InputEvent::ContextMenu { pos: screen, target });
        }

        if !on_board {
            return;
        }
        if zoom_delta != 1.0 {
            let dy = if zoom_delta > 1.0 { -1.0 } else { 1.0 };
            state.board.handle_input(InputEvent::Wheel {
                delta: Vec2::new(0.0, dy),
                zoom_modifier: true,
            });
        } else if scroll != egui::Vec2::ZERO && state.board.hit_test(screen) == HitTarget::Background {
            state.board.handle_input(InputEvent::Wheel {
                delta: Vec2::new(-scroll.x, -scroll.y),
                zoom_modifier: false,
            });
        }
    }

    fn show_panels(&self, ctx: &egui::Context, rect: Rect, state: &mut AppState) -> Vec<PanelAction> {
        let panels: Vec<Panel> = state.board.registry.panels_by_z().into_iter().cloned().collect();
        let mut actions = Vec::new();

        for panel in &panels {
            let screen = state.board.viewport.panel_screen_rect(panel.position, panel.size);
            let panel_rect = Rect::from_min_size(
                to_pos2(screen.min),
                egui::vec2(screen.size.x, screen.size.y),
            );
            if !panel_rect.intersects(rect) {
                continue;
            }

            let area_id = panel_area_id(&panel.id);
            egui::Area::new(area_id)
                .fixed_pos(panel_rect.min)
                .order(Order::Middle)
                .constrain(false)
                .show(ctx, |ui| {
                    ui.set_clip_rect(rect);
                    let closed = panel_frame::show(ui, panel, panel_rect.size(), |ui| {
                        show_panel_body(ui, panel, state, &mut actions);
                    });
                    if closed {
                        actions.push(PanelAction::Close(panel.id.clone()));
                    }
                });
            ctx.move_to_top(LayerId::new(Order::Middle, area_id));
        }
        actions
    }

    fn apply_actions(&self, actions: Vec<PanelAction>, state: &mut AppState) {
        for action in actions {
            match action {
                PanelAction::Close(id) => {
                    state.board.close_panel(&id);
                }
                PanelAction::SendChat(id) => {
                    if let Some(out) = state.board.submit_chat(&id) {
                        state.outgoing.push(out);
                    }
                }
                PanelAction::RetryChat(id) => {
                    if let Some(out) = state.board.retry_chat(&id) {
                        state.outgoing.push(out);
                    }
                }
                PanelAction::ChatAboutFiles(id) => {
                    state.board.chat_about_files(&id);
                }
                PanelAction::GetInsights(id) => {
                    state.board.get_insights(&id);
                }
            }
        }
    }

    /// Files dropped from the OS go to the upload or chat panel under the
    /// pointer
    fn handle_dropped_files(&self, ctx: &egui::Context, state: &mut AppState) {
        let (dropped, pos) = ctx.input(|i| (i.raw.dropped_files.clone(), i.pointer.hover_pos()));
        if dropped.is_empty() {
            return;
        }
        let Some(pos) = pos else {
            return;
        };
        let Some(id) = state.board.hit_test(to_vec2(pos)).panel_id().cloned() else {
            tracing::debug!("Ignoring {} file(s) dropped on the background", dropped.len());
            return;
        };

        match state.board.registry.get(&id).map(|p| p.kind()) {
            Some(PanelKind::FileUpload) => {
                let metas: Vec<_> = dropped.iter().filter_map(files::meta_from_dropped).collect();
                let kept = state.board.add_files(&id, metas);
                tracing::info!("Accepted {kept} of {} dropped file(s)", dropped.len());
            }
            Some(PanelKind::Chat) => {
                let attached = dropped.iter().filter_map(files::attachment_from_dropped).collect();
                if let Some(chat) = state.board.chat_mut(&id) {
                    chat.attach(attached);
                }
            }
            _ => {}
        }
    }
}

fn show_panel_body(ui: &mut egui::Ui, panel: &Panel, state: &mut AppState, actions: &mut Vec<PanelAction>) {
    match panel.kind() {
        PanelKind::Chat => {
            if let Some(chat) = state.board.chat_mut(&panel.id) {
                let response = chat_panel::show(ui, &panel.id, chat);
                if response.send {
                    actions.push(PanelAction::SendChat(panel.id.clone()));
                }
                if response.retry {
                    actions.push(PanelAction::RetryChat(panel.id.clone()));
                }
            }
        }
        PanelKind::FileUpload => {
            if let Some(intake) = state.board.intake_mut(&panel.id) {
                match file_panel::show(ui, &panel.id, intake) {
                    Some(file_panel::FileAction::ChatAboutFiles) => {
                        actions.push(PanelAction::ChatAboutFiles(panel.id.clone()));
                    }
                    Some(file_panel::FileAction::GetInsights) => {
                        actions.push(PanelAction::GetInsights(panel.id.clone()));
                    }
                    None => {}
                }
            }
        }
        PanelKind::Insight => {
            insight_panel::show(ui, panel.insight_text().unwrap_or_default());
        }
    }
}
