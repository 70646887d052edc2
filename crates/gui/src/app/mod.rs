//! Main application module

mod keyboard;
mod menus;
mod styles;

use eframe::egui;

use crate::canvas::CanvasView;
use crate::chat_client::{ChatClient, ChatError, ChatReply};
use crate::i18n;
use crate::state::{AppSettings, BoardState, OutgoingChat};
use crate::ui::status_bar;

/// Everything the UI reads and mutates during a frame
pub struct AppState {
    pub board: BoardState,
    pub settings: AppSettings,
    /// Prompts produced by chat panels this frame, sent after rendering
    pub outgoing: Vec<OutgoingChat>,
    /// Show settings window
    pub show_settings_window: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            board: BoardState::default(),
            settings: AppSettings::load(),
            outgoing: Vec::new(),
            show_settings_window: false,
        }
    }
}

/// Main application
pub struct BoardApp {
    state: AppState,
    canvas: CanvasView,
    client: Option<ChatClient>,
    /// Last applied font size (to detect changes)
    last_font_size: f32,
}

impl BoardApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let state = AppState::default();

        styles::configure_styles(&cc.egui_ctx, state.settings.ui.font_size);
        i18n::set_lang(state.settings.ui.language);

        let server_url = state.settings.resolved_server_url();
        let repaint_ctx = cc.egui_ctx.clone();
        let client = match ChatClient::new(server_url.clone()) {
            Ok(client) => {
                tracing::info!("Chat server: {server_url}");
                Some(client.with_repaint(move || repaint_ctx.request_repaint()))
            }
            Err(e) => {
                tracing::error!("Chat disabled: {e}");
                None
            }
        };

        let last_font_size = state.settings.ui.font_size;

        Self {
            state,
            canvas: CanvasView::default(),
            client,
            last_font_size,
        }
    }

    /// Apply replies that arrived since the last frame
    fn poll_chat(&mut self) {
        let Some(client) = &self.client else {
            return;
        };
        for reply in client.poll() {
            self.state.board.apply_chat_reply(reply);
        }
    }

    /// Dispatch prompts queued by chat panels during this frame
    fn flush_outgoing(&mut self) {
        for chat in std::mem::take(&mut self.state.outgoing) {
            match &self.client {
                Some(client) => client.send(chat),
                None => {
                    let unavailable = std::io::Error::other("chat client unavailable");
                    self.state.board.apply_chat_reply(ChatReply {
                        panel_id: chat.panel_id,
                        prompt: chat.prompt,
                        result: Err(ChatError::Runtime(unavailable)),
                    });
                }
            }
        }
    }

    fn sync_settings(&mut self, ctx: &egui::Context) {
        if self.state.settings.ui.font_size != self.last_font_size {
            styles::apply_font_size(ctx, self.state.settings.ui.font_size);
            self.last_font_size = self.state.settings.ui.font_size;
        }
        if i18n::lang() != self.state.settings.ui.language {
            i18n::set_lang(self.state.settings.ui.language);
        }
        if let Some(client) = &mut self.client {
            let url = self.state.settings.resolved_server_url();
            if client.server_url() != url {
                tracing::info!("Chat server changed to {url}");
                client.set_server_url(url);
            }
        }
    }
}

impl eframe::App for BoardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.sync_settings(ctx);
        self.poll_chat();

        keyboard::handle_keyboard(ctx, &mut self.state);

        // ── Menu bar ──────────────────────────────────────────
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                menus::file_menu(ui, &mut self.state);
                menus::view_menu(ui, &mut self.state);
                menus::settings_menu(ui, &mut self.state);
            });
        });

        // ── Settings window ──────────────────────────────────
        menus::settings_window(ctx, &mut self.state);

        // ── Status bar ───────────────────────────────────────
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(22.0)
            .frame(
                egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::symmetric(8, 2)),
            )
            .show(ctx, |ui| {
                status_bar::show(ui, &self.state);
            });

        // ── Central panel: whiteboard canvas ─────────────────
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                self.canvas.show(ui, &mut self.state);
            });

        self.flush_outgoing();
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.state.settings.save();
    }
}
