use egui::Ui;

use super::files;
use crate::i18n::t;
use crate::state::intake::{FileIntake, MAX_FILES};

/// Buttons at the bottom of an upload panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAction {
    ChatAboutFiles,
    GetInsights,
}

pub fn show(ui: &mut Ui, panel_id: &str, intake: &mut FileIntake) -> Option<FileAction> {
    let mut action = None;

    // Drop zone
    egui::Frame::NONE
        .stroke(egui::Stroke::new(1.0, egui::Color32::from_gray(90)))
        .corner_radius(egui::CornerRadius::same(6))
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new("📁").size(28.0));
                ui.label(t("files.drop"));
                let full = intake.len() >= MAX_FILES;
                if ui.add_enabled(!full, egui::Button::new(t("files.browse"))).clicked() {
                    let kept = intake.add_files(files::pick_metas());
                    tracing::info!("Added {kept} picked file(s) to {panel_id}");
                }
                ui.small(t("files.accepted"));
            });
        });

    if !intake.is_empty() {
        ui.add_space(6.0);
        ui.strong(format!("{} ({}/{MAX_FILES})", t("files.selected"), intake.len()));

        let mut remove = None;
        egui::ScrollArea::vertical()
            .id_salt(("file_list", panel_id))
            .max_height((ui.available_height() - 40.0).max(40.0))
            .show(ui, |ui| {
                for file in intake.files() {
                    ui.horizontal(|ui| {
                        ui.label(format!("{} ({} KB)", file.name, file.size_kb()));
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui
                                .small_button("✕")
                                .on_hover_text(t("files.remove_tip"))
                                .clicked()
                            {
                                remove = Some(file.name.clone());
                            }
                        });
                    });
                }
            });
        if let Some(name) = remove {
            intake.remove_file(&name);
        }
    }

    ui.with_layout(egui::Layout::bottom_up(egui::Align::Min), |ui| {
        ui.horizontal(|ui| {
            let enabled = intake.can_act();
            if ui.add_enabled(enabled, egui::Button::new(t("files.chat_about"))).clicked() {
                action = Some(FileAction::ChatAboutFiles);
            }
            if ui.add_enabled(enabled, egui::Button::new(t("files.insights"))).clicked() {
                action = Some(FileAction::GetInsights);
            }
        });
    });

    action
}
