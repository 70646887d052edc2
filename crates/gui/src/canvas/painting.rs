//! Background layer: grid, connector lines and the empty-board hint

use egui::{Color32, Painter, Pos2, Rect, Stroke};

use super::to_pos2;
use crate::i18n::t;
use crate::state::links::{LINK_DASH, LINK_GAP, LINK_STROKE};
use crate::state::{BoardState, Viewport};

pub const CANVAS_BG: Color32 = Color32::from_rgb(22, 24, 29);
const GRID_COLOR: Color32 = Color32::from_rgb(70, 76, 90);
const LINK_COLOR: Color32 = Color32::from_rgb(120, 170, 255);

/// Grid lines every `GRID_SPACING` canvas units, following scroll and zoom
pub fn draw_grid(painter: &Painter, rect: Rect, viewport: &Viewport, opacity: f32) {
    let cell = viewport.grid_cell_px();
    if cell < 4.0 {
        return;
    }
    let stroke = Stroke::new(1.0, GRID_COLOR.gamma_multiply(opacity.clamp(0.0, 1.0)));
    let scroll = viewport.scroll_offset();

    let mut x = rect.left() + (-scroll.x).rem_euclid(cell);
    while x < rect.right() {
        painter.line_segment([Pos2::new(x, rect.top()), Pos2::new(x, rect.bottom())], stroke);
        x += cell;
    }
    let mut y = rect.top() + (-scroll.y).rem_euclid(cell);
    while y < rect.bottom() {
        painter.line_segment([Pos2::new(rect.left(), y), Pos2::new(rect.right(), y)], stroke);
        y += cell;
    }
}

/// Dashed connectors from upload panels to their insights. Stroke and dash
/// pattern follow the zoom; endpoints stay attached to the panel edges.
pub fn draw_links(painter: &Painter, board: &BoardState) {
    let zoom = board.viewport.zoom_level();
    let stroke = Stroke::new(LINK_STROKE * zoom, LINK_COLOR);
    for link in board.links() {
        let Some((from, to)) = link.screen_segment(&board.registry, &board.viewport) else {
            continue;
        };
        draw_dashed_line(painter, to_pos2(from), to_pos2(to), stroke, LINK_DASH * zoom, LINK_GAP * zoom);
    }
}

fn draw_dashed_line(painter: &Painter, start: Pos2, end: Pos2, stroke: Stroke, dash: f32, gap: f32) {
    let delta = end - start;
    let length = delta.length();
    if length < 0.1 {
        return;
    }
    let dir = delta / length;

    let mut pos = 0.0;
    while pos < length {
        let segment_end = (pos + dash).min(length);
        painter.line_segment([start + dir * pos, start + dir * segment_end], stroke);
        pos = segment_end + gap;
    }
}

/// Centered title and usage hint shown while the board is empty
pub fn draw_empty_hint(painter: &Painter, rect: Rect) {
    let center = rect.center();
    painter.text(
        center - egui::vec2(0.0, 16.0),
        egui::Align2::CENTER_CENTER,
        t("board.hint_title"),
        egui::FontId::proportional(28.0),
        Color32::from_gray(150),
    );
    painter.text(
        center + egui::vec2(0.0, 18.0),
        egui::Align2::CENTER_CENTER,
        t("board.hint_body"),
        egui::FontId::proportional(14.0),
        Color32::from_gray(110),
    );
}
