use egui::Ui;

use crate::app::AppState;
use crate::i18n::t;
use crate::state::PanelKind;

pub fn show(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui| {
        let registry = &state.board.registry;
        ui.weak(format!("{}: {}", t("status.panels"), registry.len()));
        for kind in [PanelKind::Chat, PanelKind::FileUpload, PanelKind::Insight] {
            let n = registry.count_kind(kind);
            if n > 0 {
                ui.weak(format!("{} {n}", kind.icon()));
            }
        }

        ui.separator();
        let zoom = state.board.viewport.zoom_level();
        ui.weak(format!("{}: {:.0}%", t("status.zoom"), zoom * 100.0));

        ui.separator();
        let pending = state.board.pending_chat_count();
        if pending > 0 {
            ui.colored_label(
                egui::Color32::from_rgb(255, 200, 100),
                format!("{} ({pending})", t("status.ai_thinking")),
            );
        } else {
            ui.weak(t("status.ready"));
        }

        // Right-aligned version
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.weak("Insight Board v0.1");
        });
    });
}
