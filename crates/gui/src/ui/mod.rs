pub mod chat_panel;
pub mod file_panel;
pub mod files;
pub mod insight_panel;
pub mod panel_frame;
pub mod status_bar;
pub mod zoom_controls;
