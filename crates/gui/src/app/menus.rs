//! Application menu bar and settings window

use eframe::egui;

use super::AppState;
use crate::i18n::t;
use crate::state::{AppSettings, Language};

/// Show the file menu
pub fn file_menu(ui: &mut egui::Ui, state: &mut AppState) {
    ui.menu_button(t("menu.file"), |ui| {
        if ui.button(t("menu.new")).clicked() {
            state.board.clear();
            state.outgoing.clear();
            ui.close_menu();
        }
        if ui.button(t("menu.export")).clicked() {
            ui.close_menu();
            export_board(state);
        }
        ui.separator();
        if ui.button(t("menu.quit")).clicked() {
            ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

/// Write the panel list as pretty JSON to a user-chosen file
fn export_board(state: &AppState) {
    let Some(path) = rfd::FileDialog::new()
        .set_title(t("menu.export_title"))
        .add_filter("JSON", &["json"])
        .set_file_name("board.json")
        .save_file()
    else {
        return;
    };
    match serde_json::to_string_pretty(state.board.registry.panels()) {
        Ok(json) => {
            if let Err(e) = std::fs::write(&path, json) {
                tracing::error!("Failed to write board: {e}");
            } else {
                tracing::info!("Exported board to {}", path.display());
            }
        }
        Err(e) => tracing::error!("Failed to serialize board: {e}"),
    }
}

/// Show the view menu
pub fn view_menu(ui: &mut egui::Ui, state: &mut AppState) {
    ui.menu_button(t("menu.view"), |ui| {
        if ui.button(t("menu.zoom_in")).clicked() {
            state.board.zoom_in();
        }
        if ui.button(t("menu.zoom_out")).clicked() {
            state.board.zoom_out();
        }
        if ui.button(t("menu.reset_zoom")).clicked() {
            state.board.viewport.reset_zoom();
            ui.close_menu();
        }
        if ui.button(t("menu.center")).clicked() {
            state.board.viewport.center_scroll();
            ui.close_menu();
        }
        ui.separator();
        ui.checkbox(&mut state.settings.grid.visible, t("menu.grid"));
        ui.separator();
        ui.menu_button(t("menu.language"), |ui| {
            for &language in Language::all() {
                if ui
                    .selectable_label(state.settings.ui.language == language, language.display_name())
                    .clicked()
                {
                    state.settings.ui.language = language;
                    ui.close_menu();
                }
            }
        });
    });
}

/// Show the settings menu
pub fn settings_menu(ui: &mut egui::Ui, state: &mut AppState) {
    ui.menu_button(t("menu.settings"), |ui| {
        if ui.button(t("menu.preferences")).clicked() {
            state.show_settings_window = true;
            ui.close_menu();
        }
    });
}

/// Show the settings window
pub fn settings_window(ctx: &egui::Context, state: &mut AppState) {
    let mut open = state.show_settings_window;
    egui::Window::new(t("settings.title"))
        .open(&mut open)
        .resizable(true)
        .default_width(380.0)
        .show(ctx, |ui| {
            show_server_settings(ui, state);
            show_grid_settings(ui, state);
            show_ui_settings(ui, state);
            show_settings_buttons(ui, state);
        });
    state.show_settings_window = open && state.show_settings_window;
}

fn show_server_settings(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading(t("settings.server"));
    ui.horizontal(|ui| {
        ui.label(t("settings.server_url"));
        ui.text_edit_singleline(&mut state.settings.server_url);
    });
    if std::env::var(crate::state::settings::SERVER_URL_ENV).is_ok() {
        ui.weak(t("settings.server_env"));
    }
    ui.add_space(10.0);
}

fn show_grid_settings(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading(t("settings.grid"));
    ui.checkbox(&mut state.settings.grid.visible, t("settings.grid_visible"));
    ui.horizontal(|ui| {
        ui.label(t("settings.grid_opacity"));
        ui.add(egui::Slider::new(&mut state.settings.grid.opacity, 0.0..=1.0));
    });
    ui.add_space(10.0);
}

fn show_ui_settings(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading(t("settings.ui"));
    ui.horizontal(|ui| {
        ui.label(t("settings.font_size"));
        ui.add(
            egui::DragValue::new(&mut state.settings.ui.font_size)
                .speed(0.5)
                .range(8.0..=24.0)
                .suffix(" pt"),
        );
    });
    ui.add_space(10.0);
}

fn show_settings_buttons(ui: &mut egui::Ui, state: &mut AppState) {
    ui.separator();
    ui.horizontal(|ui| {
        if ui.button(t("settings.apply")).clicked() {
            state.settings.save();
        }
        if ui.button(t("settings.reset")).clicked() {
            state.settings = AppSettings::default();
        }
        if ui.button(t("settings.close")).clicked() {
            state.show_settings_window = false;
        }
    });
}
