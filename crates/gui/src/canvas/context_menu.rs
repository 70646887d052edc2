//! Spawn menu drawn at the right-click point

use crate::app::AppState;
use crate::i18n::t;
use crate::state::context_menu::MENU_SIZE;
use crate::state::MenuAction;

use super::to_pos2;

pub fn area_id() -> egui::Id {
    egui::Id::new("board_context_menu")
}

/// Show the menu if it is open. It is drawn unscaled, on top of every panel.
pub fn show(ctx: &egui::Context, state: &mut AppState) {
    let Some(rect) = state.board.menu.screen_rect(&state.board.viewport) else {
        return;
    };

    let mut chosen = None;
    egui::Area::new(area_id())
        .fixed_pos(to_pos2(rect.min))
        .order(egui::Order::Foreground)
        .constrain(false)
        .show(ctx, |ui| {
            egui::Frame::menu(ui.style()).show(ui, |ui| {
                ui.set_width(MENU_SIZE.x - 12.0);
                for action in MenuAction::ALL {
                    let label = match action {
                        MenuAction::AddChat => t("ctx.add_chat"),
                        MenuAction::AddFile => t("ctx.add_file"),
                    };
                    let button = egui::Button::new(label).frame(false).min_size(egui::vec2(
                        ui.available_width(),
                        26.0,
                    ));
                    if ui.add(button).clicked() {
                        chosen = Some(action);
                    }
                }
            });
        });

    if let Some(action) = chosen {
        state.board.choose_menu_action(action);
    }
}
