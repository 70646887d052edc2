use egui::Ui;
use shared::Sender;

use super::files;
use crate::i18n::t;
use crate::state::chat::{ChatMessage, ChatState};

/// What the user asked for this frame
#[derive(Debug, Default, Clone, Copy)]
pub struct ChatPanelResponse {
    pub send: bool,
    pub retry: bool,
}

pub fn show(ui: &mut Ui, panel_id: &str, chat: &mut ChatState) -> ChatPanelResponse {
    let mut response = ChatPanelResponse::default();

    // Room for the input row and attachment strip
    let reserved = if chat.attachments.is_empty() { 36.0 } else { 100.0 };
    let scroll_height = (ui.available_height() - reserved).max(60.0);
    egui::ScrollArea::vertical()
        .id_salt(("chat_scroll", panel_id))
        .max_height(scroll_height)
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            if chat.messages.is_empty() && !chat.is_loading {
                ui.add_space(10.0);
                ui.vertical_centered(|ui| {
                    ui.weak(t("chat.placeholder"));
                });
            }

            let last = chat.messages.len().saturating_sub(1);
            for (i, msg) in chat.messages.iter().enumerate() {
                let can_retry = i == last && msg.is_error && chat.last_failed_prompt.is_some();
                if show_message(ui, msg, can_retry) {
                    response.retry = true;
                }
            }

            if chat.is_loading {
                ui.add_space(4.0);
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.weak(t("chat.thinking"));
                });
            }
        });

    if !chat.attachments.is_empty() {
        show_attachments(ui, chat);
    }

    // Input area
    ui.add_space(2.0);
    ui.horizontal(|ui| {
        if ui.button("📎").on_hover_text(t("chat.attach_tip")).clicked() {
            let picked = files::pick_attachments();
            if !picked.is_empty() {
                chat.attach(picked);
            }
        }

        let available_w = ui.available_width() - 44.0;
        let input_resp = ui.add_sized(
            [available_w.max(40.0), 22.0],
            egui::TextEdit::singleline(&mut chat.input)
                .hint_text(t("chat.ask"))
                .desired_width(available_w.max(40.0)),
        );
        let enter_pressed =
            input_resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        let can_send = chat.can_send();

        let send_clicked = ui
            .add_enabled(can_send, egui::Button::new(">>"))
            .on_hover_text(t("chat.send_tip"))
            .clicked();

        if (send_clicked || enter_pressed) && can_send {
            response.send = true;
        }
    });

    response
}

/// Thumbnails for attached images, names for everything else
fn show_attachments(ui: &mut Ui, chat: &mut ChatState) {
    let mut clear = false;
    ui.horizontal_wrapped(|ui| {
        for image in &chat.attachments.images {
            match &image.path {
                Some(path) => {
                    ui.add(
                        egui::Image::new(format!("file://{}", path.display()))
                            .fit_to_exact_size(egui::vec2(48.0, 48.0))
                            .corner_radius(4),
                    )
                    .on_hover_text(&image.meta.name);
                }
                None => {
                    ui.small(format!("🖼 {}", image.meta.name));
                }
            }
        }
        for other in &chat.attachments.others {
            ui.small(format!("📄 {}", other.name));
        }
        if ui.small_button("✕").clicked() {
            clear = true;
        }
    });
    if clear {
        chat.clear_attachments();
    }
}

/// Render a single chat message. Returns true if retry was clicked.
fn show_message(ui: &mut Ui, msg: &ChatMessage, can_retry: bool) -> bool {
    let mut retry_clicked = false;

    let (prefix, color, bg) = if msg.is_error {
        (
            "AI",
            egui::Color32::from_rgb(255, 130, 130),
            egui::Color32::from_rgba_premultiplied(80, 30, 30, 200),
        )
    } else {
        match msg.sender {
            Sender::User => (
                t("chat.you"),
                egui::Color32::from_rgb(130, 190, 255),
                egui::Color32::from_rgba_premultiplied(40, 60, 90, 200),
            ),
            Sender::Ai => (
                "AI",
                egui::Color32::from_rgb(130, 255, 170),
                egui::Color32::from_rgba_premultiplied(30, 60, 40, 200),
            ),
        }
    };

    egui::Frame::NONE
        .fill(bg)
        .corner_radius(egui::CornerRadius::same(4))
        .inner_margin(egui::Margin::same(6))
        .outer_margin(egui::Margin::symmetric(0, 2))
        .show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.colored_label(color, format!("{prefix}:"));
                ui.label(&msg.text);
            });

            if can_retry {
                ui.add_space(2.0);
                if ui.small_button(t("chat.retry")).clicked() {
                    retry_clicked = true;
                }
            }
        });

    retry_clicked
}
