//! Keyboard shortcut handling

use eframe::egui;

use super::AppState;

/// Handle keyboard shortcuts for the application
pub fn handle_keyboard(ctx: &egui::Context, state: &mut AppState) {
    // Don't handle shortcuts when a text field is focused
    if ctx.memory(|m| m.focused().is_some()) {
        return;
    }

    ctx.input(|i| {
        // Escape: close the context menu
        if i.key_pressed(egui::Key::Escape) {
            state.board.menu.dismiss();
        }
        // Ctrl+= / Ctrl++: zoom in
        if i.modifiers.command && (i.key_pressed(egui::Key::Equals) || i.key_pressed(egui::Key::Plus)) {
            state.board.zoom_in();
        }
        // Ctrl+-: zoom out
        if i.modifiers.command && i.key_pressed(egui::Key::Minus) {
            state.board.zoom_out();
        }
        // Ctrl+0: reset zoom
        if i.modifiers.command && i.key_pressed(egui::Key::Num0) {
            state.board.viewport.reset_zoom();
        }
    });
}
