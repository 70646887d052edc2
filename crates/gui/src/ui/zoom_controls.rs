//! Zoom buttons pinned to the bottom-right corner of the canvas

use egui::Rect;

use crate::i18n::t;
use crate::state::BoardState;

const MARGIN: f32 = 16.0;

pub fn show(ctx: &egui::Context, canvas: Rect, board: &mut BoardState) {
    egui::Area::new(egui::Id::new("board_zoom_controls"))
        .pivot(egui::Align2::RIGHT_BOTTOM)
        .fixed_pos(canvas.right_bottom() - egui::vec2(MARGIN, MARGIN))
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            egui::Frame::menu(ui.style()).show(ui, |ui| {
                ui.horizontal(|ui| {
                    if ui.button("−").on_hover_text(t("zoom.out_tip")).clicked() {
                        board.zoom_out();
                    }
                    let label = format!("{:.0}%", board.viewport.zoom_level() * 100.0);
                    if ui
                        .add(egui::Button::new(label).frame(false).min_size(egui::vec2(48.0, 0.0)))
                        .on_hover_text(t("zoom.reset_tip"))
                        .clicked()
                    {
                        board.viewport.reset_zoom();
                    }
                    if ui.button("+").on_hover_text(t("zoom.in_tip")).clicked() {
                        board.zoom_in();
                    }
                });
            });
        });
}
