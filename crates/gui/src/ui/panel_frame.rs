//! Shared chrome for board panels: header strip with icon, title and close
//! button, then the kind-specific body

use egui::{Color32, CornerRadius, Margin, Ui, Vec2};

use crate::i18n::t;
use crate::state::input::HEADER_HEIGHT;
use crate::state::{short_id, Panel, PanelKind};

const PANEL_FILL: Color32 = Color32::from_rgb(36, 39, 46);
const HEADER_FILL: Color32 = Color32::from_rgb(46, 50, 60);
const BORDER: Color32 = Color32::from_rgb(70, 76, 90);

fn title(kind: PanelKind) -> &'static str {
    match kind {
        PanelKind::Chat => t("panel.chat"),
        PanelKind::FileUpload => t("panel.files"),
        PanelKind::Insight => t("panel.insight"),
    }
}

/// Draw a panel of fixed `size`. Returns true when the close button was
/// clicked.
pub fn show(ui: &mut Ui, panel: &Panel, size: Vec2, body: impl FnOnce(&mut Ui)) -> bool {
    let mut closed = false;
    egui::Frame::NONE
        .fill(PANEL_FILL)
        .stroke(egui::Stroke::new(1.0, BORDER))
        .corner_radius(CornerRadius::same(8))
        .show(ui, |ui| {
            ui.set_min_size(size);
            ui.set_max_size(size);
            ui.spacing_mut().item_spacing.y = 0.0;

            egui::Frame::NONE
                .fill(HEADER_FILL)
                .corner_radius(CornerRadius { nw: 8, ne: 8, sw: 0, se: 0 })
                .inner_margin(Margin::symmetric(12, 0))
                .show(ui, |ui| {
                    ui.set_min_size(egui::vec2(size.x - 24.0, HEADER_HEIGHT));
                    ui.set_max_height(HEADER_HEIGHT);
                    ui.horizontal_centered(|ui| {
                        let kind = panel.kind();
                        ui.label(kind.icon());
                        ui.strong(title(kind)).on_hover_text(short_id(&panel.id));
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui
                                .add(egui::Button::new("✕").frame(false))
                                .on_hover_text(t("panel.close_tip"))
                                .clicked()
                            {
                                closed = true;
                            }
                        });
                    });
                });

            egui::Frame::NONE
                .inner_margin(Margin::same(10))
                .show(ui, |ui| {
                    ui.spacing_mut().item_spacing.y = 5.0;
                    ui.set_width(size.x - 20.0);
                    ui.set_height(size.y - HEADER_HEIGHT - 20.0);
                    body(ui);
                });
        });
    closed
}
