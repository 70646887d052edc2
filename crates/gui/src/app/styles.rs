//! Application style configuration

use eframe::egui;

/// Configure initial application styles with given font size
pub fn configure_styles(ctx: &egui::Context, font_size: f32) {
    let mut style = (*ctx.style()).clone();

    style.visuals = egui::Visuals::dark();

    // Rounding
    style.visuals.window_corner_radius = egui::CornerRadius::same(8);
    style.visuals.menu_corner_radius = egui::CornerRadius::same(6);
    for widgets in [
        &mut style.visuals.widgets.noninteractive,
        &mut style.visuals.widgets.inactive,
        &mut style.visuals.widgets.hovered,
        &mut style.visuals.widgets.active,
    ] {
        widgets.corner_radius = egui::CornerRadius::same(4);
    }

    // Spacing
    style.spacing.item_spacing = egui::vec2(6.0, 5.0);
    style.spacing.button_padding = egui::vec2(8.0, 4.0);
    style.spacing.menu_margin = egui::Margin::same(4);

    style.visuals.panel_fill = egui::Color32::from_rgb(28, 30, 36);
    style.visuals.window_fill = egui::Color32::from_rgb(36, 39, 46);
    style.visuals.selection.bg_fill = egui::Color32::from_rgb(52, 96, 168);

    apply_text_styles(&mut style, font_size);

    ctx.set_style(style);
    // Ctrl +/- zooms the board, not the UI
    ctx.options_mut(|o| o.zoom_with_keyboard = false);
}

/// Apply font size to all text styles
pub fn apply_font_size(ctx: &egui::Context, font_size: f32) {
    let mut style = (*ctx.style()).clone();
    apply_text_styles(&mut style, font_size);
    ctx.set_style(style);
}

fn apply_text_styles(style: &mut egui::Style, font_size: f32) {
    use egui::{FontId, TextStyle};
    style.text_styles.insert(TextStyle::Body, FontId::proportional(font_size));
    style.text_styles.insert(TextStyle::Button, FontId::proportional(font_size));
    style.text_styles.insert(TextStyle::Small, FontId::proportional(font_size * 0.85));
    style.text_styles.insert(TextStyle::Heading, FontId::proportional(font_size * 1.3));
    style.text_styles.insert(TextStyle::Monospace, FontId::monospace(font_size));
}
